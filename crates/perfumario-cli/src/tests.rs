use clap::Parser;
use perfumario_core::toast::{ToastKind, ToastState};
use perfumario_core::{Gender, Perfume};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::cli::{
    BrandCommands, Cli, Commands, CompletionShell, ConfigCommands, ExportFormatArg, GenderArg,
    InventoryCommands,
};
use crate::cli_config::CliConfig;
use crate::commands::common::{
    format_perfume_lines, format_toast, output_path_for, perfume_to_list_item,
    resolve_api_base_url, short_id,
};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::theme::format_palette_lines;

fn perfume(id: &str, name: &str, stock: u32) -> Perfume {
    Perfume {
        id: id.to_string(),
        name: name.to_string(),
        gender: Gender::Female,
        brand_id: "b1".to_string(),
        stock,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "perfumario",
        "list",
        "--offline",
        "--api-url",
        "http://localhost:3000",
        "--json",
    ])
    .unwrap();
    assert!(cli.global.offline);
    assert_eq!(cli.global.api_url.as_deref(), Some("http://localhost:3000"));
    assert!(matches!(
        cli.command,
        Commands::Inventory(InventoryCommands::List {
            limit: None,
            json: true
        })
    ));
}

#[test]
fn stock_accepts_negative_change() {
    let cli = Cli::try_parse_from(["perfumario", "stock", "abc", "-3"]).unwrap();
    match cli.command {
        Commands::Inventory(InventoryCommands::Stock { id, change }) => {
            assert_eq!(id, "abc");
            assert_eq!(change, -3);
        }
        _ => panic!("expected stock command"),
    }
}

#[test]
fn add_requires_gender_value() {
    assert!(Cli::try_parse_from(["perfumario", "add", "--name", "X", "--brand", "Dior"]).is_err());

    let cli = Cli::try_parse_from([
        "perfumario",
        "add",
        "--name",
        "Miss Dior",
        "--gender",
        "female",
        "--brand",
        "Dior",
    ])
    .unwrap();
    match cli.command {
        Commands::Inventory(InventoryCommands::Add { gender, stock, .. }) => {
            assert_eq!(gender, GenderArg::Female);
            assert_eq!(Gender::from(gender), Gender::Female);
            assert_eq!(stock, 0);
        }
        _ => panic!("expected add command"),
    }
}

#[test]
fn export_defaults_to_html() {
    let cli = Cli::try_parse_from(["perfumario", "export"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Inventory(InventoryCommands::Export {
            format: ExportFormatArg::Html,
            output: None
        })
    ));
}

#[test]
fn brands_subcommands_parse() {
    let cli = Cli::try_parse_from(["perfumario", "brands", "add", "Creed"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Inventory(InventoryCommands::Brands {
            command: BrandCommands::Add { ref name }
        }) if name == "Creed"
    ));
}

#[test]
fn config_keeps_api_url_flag_outside_inventory_commands() {
    let cli = Cli::try_parse_from([
        "perfumario",
        "config",
        "show",
        "--api-url",
        "https://flag.example.com",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show
        }
    ));
    assert_eq!(cli.global.api_url.as_deref(), Some("https://flag.example.com"));

    let cli = Cli::try_parse_from(["perfumario", "completions", "zsh"]).unwrap();
    assert!(matches!(cli.command, Commands::Completions { .. }));
}

#[test]
fn api_base_url_precedence() {
    let config = CliConfig {
        version: 1,
        api_base_url: Some("https://stored.example.com".to_string()),
    };

    assert_eq!(
        resolve_api_base_url(
            Some("https://flag.example.com".to_string()),
            Some("https://env.example.com".to_string()),
            &config
        )
        .as_deref(),
        Some("https://flag.example.com")
    );
    assert_eq!(
        resolve_api_base_url(None, Some("https://env.example.com".to_string()), &config).as_deref(),
        Some("https://env.example.com")
    );
    assert_eq!(
        resolve_api_base_url(Some("  ".to_string()), None, &config).as_deref(),
        Some("https://stored.example.com")
    );
    assert_eq!(resolve_api_base_url(None, None, &CliConfig::default()), None);
}

#[test]
fn perfume_lines_show_brand_and_status() {
    let rows = vec![
        (perfume("0123456789abcdef", "J'adore", 0), "Dior".to_string()),
        (
            perfume("fedcba", "An extraordinarily long perfume name here", 4),
            "Unknown brand".to_string(),
        ),
    ];
    let lines = format_perfume_lines(&rows);
    assert!(lines[0].starts_with("01234567  J'adore"));
    assert!(lines[0].contains("Dior"));
    assert!(lines[0].ends_with("Out of stock"));
    assert!(lines[1].contains("An extraordinarily long p..."));
    assert!(lines[1].ends_with("Available"));
}

#[test]
fn list_item_carries_brand_name() {
    let item = perfume_to_list_item(&perfume("p1", "Idôle", 2), "Lancôme");
    assert_eq!(item.brand, "Lancôme");
    assert_eq!(item.gender, "female");
    assert_eq!(item.status, "Available");
    assert_eq!(short_id("abc"), "abc");
}

#[test]
fn toast_format_includes_kind() {
    let mut toast = ToastState::new();
    toast.show("Deleted Sauvage", ToastKind::Success);
    assert_eq!(format_toast(&toast), "[success] Deleted Sauvage");
}

#[test]
fn output_directory_gets_suggested_file_name() {
    let tmp = tempdir().unwrap();
    let resolved = output_path_for(tmp.path().to_path_buf(), "perfumario-inventory-1.html");
    assert_eq!(resolved, tmp.path().join("perfumario-inventory-1.html"));

    let file = tmp.path().join("report.html");
    assert_eq!(output_path_for(file.clone(), "ignored.html"), file);
}

#[test]
fn palette_lines_cover_every_color() {
    let lines = format_palette_lines(perfumario_core::theme::ResolvedTheme::Dark.palette());
    assert_eq!(lines.len(), 14);
    assert!(lines[0].contains("#111827"));
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("perfumario"));

    let tmp = tempdir().unwrap();
    let path = tmp.path().join("perfumario.fish");
    run_completions(CompletionShell::Fish, Some(&path)).unwrap();
    assert!(std::fs::read_to_string(path).unwrap().contains("perfumario"));
}
