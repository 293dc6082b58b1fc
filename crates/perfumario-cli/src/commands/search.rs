use perfumario_core::search::{normalize_search_query, MIN_SEARCH_CHARS};
use perfumario_core::toast::ToastKind;

use crate::commands::common::{notify, print_perfumes, Session};
use crate::error::CliError;

pub async fn run_search(query: &str, as_json: bool, session: &mut Session) -> Result<(), CliError> {
    if normalize_search_query(query).is_none() {
        notify(
            ToastKind::Info,
            format!("Type at least {MIN_SEARCH_CHARS} characters to search"),
        );
        return Ok(());
    }

    let perfumes = session.service.search_perfumes(query).await?;
    if perfumes.is_empty() {
        notify(ToastKind::Info, format!("No perfumes match '{}'", query.trim()));
    }
    let rows = session.service.pair_brand_names(perfumes).await;
    print_perfumes(&rows, as_json)
}
