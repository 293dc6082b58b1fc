use perfumario_core::search::FilterOptions;
use perfumario_core::toast::ToastKind;

use crate::cli::GenderArg;
use crate::commands::common::{notify, print_perfumes, resolve_brand, Session};
use crate::error::CliError;

pub async fn run_filter(
    gender: Option<GenderArg>,
    brand: Option<&str>,
    as_json: bool,
    session: &mut Session,
) -> Result<(), CliError> {
    let brand_id = match brand.map(str::trim).filter(|brand| !brand.is_empty()) {
        Some(query) => Some(resolve_brand(&mut session.service, query).await?.id),
        None => None,
    };

    let filters = FilterOptions::new(gender.map(Into::into), brand_id);
    if !filters.is_active() {
        notify(ToastKind::Info, "Select a gender or a brand to filter");
        return Ok(());
    }

    let perfumes = session.service.filter_perfumes(&filters).await?;
    if perfumes.is_empty() {
        notify(ToastKind::Info, "No perfumes match the selected filters");
    }
    let rows = session.service.pair_brand_names(perfumes).await;
    print_perfumes(&rows, as_json)
}
