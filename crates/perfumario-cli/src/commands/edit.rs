use perfumario_core::models::PerfumeUpdate;
use perfumario_core::toast::ToastKind;

use crate::cli::GenderArg;
use crate::commands::common::{notify, resolve_brand, Session};
use crate::error::CliError;

pub async fn run_edit(
    id: &str,
    name: Option<String>,
    gender: Option<GenderArg>,
    brand: Option<&str>,
    stock: Option<u32>,
    session: &mut Session,
) -> Result<(), CliError> {
    let perfume = session.service.resolve_perfume(id).await?;
    let brand_id = match brand {
        Some(query) => Some(resolve_brand(&mut session.service, query).await?.id),
        None => None,
    };

    let update = PerfumeUpdate {
        name,
        gender: gender.map(Into::into),
        brand_id,
        stock,
    };
    let updated = session.service.update_perfume(&perfume.id, update).await?;

    println!("{}", updated.id);
    notify(ToastKind::Success, format!("Updated {}", updated.name));
    Ok(())
}
