use std::path::PathBuf;

use chrono::Utc;
use perfumario_core::export::{suggested_export_file_name, ExportFormat};
use perfumario_core::toast::ToastKind;

use crate::cli::ExportFormatArg;
use crate::commands::common::{notify, output_path_for, Session};
use crate::error::CliError;

pub async fn run_export(
    format: ExportFormatArg,
    output_path: Option<PathBuf>,
    session: &mut Session,
) -> Result<(), CliError> {
    let format = ExportFormat::from(format);
    let generated_at = Utc::now();
    let report = session.service.inventory_report(generated_at).await?;
    let rendered = report.render(format)?;

    if let Some(path) = output_path {
        let file_name = suggested_export_file_name(format, generated_at.timestamp_millis());
        let path = output_path_for(path, &file_name);
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
        notify(
            ToastKind::Success,
            format!("Exported {} perfumes", report.total),
        );
    } else {
        println!("{rendered}");
    }

    Ok(())
}
