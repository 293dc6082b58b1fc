use perfumario_core::toast::ToastKind;

use crate::commands::common::{notify, Session};
use crate::error::CliError;

pub async fn run_delete(id: &str, session: &mut Session) -> Result<(), CliError> {
    let perfume = session.service.resolve_perfume(id).await?;
    session.service.delete_perfume(&perfume.id).await?;

    println!("{}", perfume.id);
    notify(ToastKind::Success, format!("Deleted {}", perfume.name));
    Ok(())
}
