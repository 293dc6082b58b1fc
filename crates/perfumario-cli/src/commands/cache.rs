use perfumario_core::toast::ToastKind;

use crate::cli::CacheCommands;
use crate::commands::common::{notify, Session};
use crate::error::CliError;

pub async fn run_cache(command: CacheCommands, session: &mut Session) -> Result<(), CliError> {
    match command {
        CacheCommands::Clear => {
            let entries = session.service.cache().len();
            session.service.cache_mut().clear();
            session.remove_persisted_cache().await?;
            notify(
                ToastKind::Success,
                format!("Cleared {entries} cached queries"),
            );
        }
    }
    Ok(())
}
