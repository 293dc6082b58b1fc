use perfumario_core::models::NewPerfume;
use perfumario_core::toast::ToastKind;

use crate::cli::GenderArg;
use crate::commands::common::{notify, resolve_brand, Session};
use crate::error::CliError;

pub async fn run_add(
    name: &str,
    gender: GenderArg,
    brand: &str,
    stock: u32,
    session: &mut Session,
) -> Result<(), CliError> {
    let brand = resolve_brand(&mut session.service, brand).await?;
    let perfume = NewPerfume::new(name, gender.into(), &brand.id, stock)?;
    let created = session.service.create_perfume(&perfume).await?;

    println!("{}", created.id);
    notify(ToastKind::Success, format!("Added {}", created.name));
    Ok(())
}
