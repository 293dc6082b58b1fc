use perfumario_core::toast::ToastKind;

use crate::commands::common::{notify, Session};
use crate::error::CliError;

pub async fn run_stock(id: &str, change: i64, session: &mut Session) -> Result<(), CliError> {
    let perfume = session.service.resolve_perfume(id).await?;
    let updated = session.service.update_stock(&perfume.id, change).await?;

    println!("{}", updated.stock);
    notify(
        ToastKind::Success,
        format!(
            "{}: stock {} -> {} ({})",
            updated.name,
            perfume.stock,
            updated.stock,
            updated.stock_status().label()
        ),
    );
    Ok(())
}
