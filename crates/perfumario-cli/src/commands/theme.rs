use perfumario_core::db::{LibSqlSettingsRepository, SettingsRepository};
use perfumario_core::models::ColorScheme;
use perfumario_core::theme::Palette;
use perfumario_core::toast::ToastKind;

use crate::cli::ColorSchemeArg;
use crate::commands::common::{notify, Session};
use crate::error::CliError;

pub async fn run_theme(
    scheme: Option<ColorSchemeArg>,
    system_dark: bool,
    session: &Session,
) -> Result<(), CliError> {
    let repo = LibSqlSettingsRepository::new(session.database().connection());
    let mut settings = repo.load().await?;

    if let Some(scheme) = scheme {
        settings.color_scheme = ColorScheme::from(scheme);
        repo.save(&settings).await?;
        notify(
            ToastKind::Success,
            format!("Color scheme set to {}", settings.color_scheme),
        );
    }

    let resolved = settings.color_scheme.resolve(system_dark);
    println!("color scheme: {} ({})", settings.color_scheme, resolved.as_str());
    for line in format_palette_lines(resolved.palette()) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_palette_lines(palette: &Palette) -> Vec<String> {
    [
        ("background", palette.background),
        ("surface", palette.surface),
        ("primary", palette.primary),
        ("primaryLight", palette.primary_light),
        ("secondary", palette.secondary),
        ("text", palette.text),
        ("textSecondary", palette.text_secondary),
        ("textTertiary", palette.text_tertiary),
        ("border", palette.border),
        ("error", palette.error),
        ("success", palette.success),
        ("warning", palette.warning),
        ("card", palette.card),
        ("overlay", palette.overlay),
    ]
    .into_iter()
    .map(|(name, color)| format!("  {name:<14} {color}"))
    .collect()
}
