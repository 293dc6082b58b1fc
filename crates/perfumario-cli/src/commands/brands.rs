use perfumario_core::models::NewBrand;
use perfumario_core::toast::ToastKind;

use crate::cli::BrandCommands;
use crate::commands::common::{format_brand_lines, notify, resolve_brand, Session};
use crate::error::CliError;

pub async fn run_brands(command: BrandCommands, session: &mut Session) -> Result<(), CliError> {
    match command {
        BrandCommands::List { json } => {
            let brands = session.service.list_brands().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&brands)?);
            } else {
                for line in format_brand_lines(&brands) {
                    println!("{line}");
                }
            }
        }
        BrandCommands::Add { name } => {
            let brand = NewBrand::new(&name)?;
            let created = session.service.create_brand(&brand).await?;
            println!("{}", created.id);
            notify(ToastKind::Success, format!("Added brand {}", created.name));
        }
        BrandCommands::Delete { brand } => {
            let brand = resolve_brand(&mut session.service, &brand).await?;
            session.service.delete_brand(&brand.id).await?;
            println!("{}", brand.id);
            notify(ToastKind::Success, format!("Deleted brand {}", brand.name));
        }
    }
    Ok(())
}
