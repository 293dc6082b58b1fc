use crate::commands::common::{print_perfumes, Session};
use crate::error::CliError;

pub async fn run_list(
    limit: Option<usize>,
    as_json: bool,
    session: &mut Session,
) -> Result<(), CliError> {
    let mut rows = session.service.perfumes_with_brand_names().await?;
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    print_perfumes(&rows, as_json)
}
