//! Perfumario CLI - manage the perfume inventory from the terminal
//!
//! Reads go through a local query cache so the inventory stays available
//! offline; outcomes are reported as toasts on stderr.

mod cli;
mod cli_config;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;
use perfumario_core::toast::ToastKind;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, InventoryCommands};
use crate::commands::add::run_add;
use crate::commands::brands::run_brands;
use crate::commands::cache::run_cache;
use crate::commands::common::{notify, Session};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::filter::run_filter;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::stock::run_stock;
use crate::commands::theme::run_theme;
use crate::error::CliError;

const DEFAULT_LOG_DIRECTIVE: &str = "perfumario=info";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        notify(ToastKind::Error, error.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = DEFAULT_LOG_DIRECTIVE.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref()),
        Commands::Config { command } => run_config(command, cli.global.api_url),
        Commands::Inventory(command) => {
            let mut session = Session::open(&cli.global).await?;
            let result = dispatch(command, &mut session).await;
            if let Err(error) = session.persist().await {
                tracing::warn!("Could not persist query cache: {error}");
            }
            result
        }
    }
}

async fn dispatch(command: InventoryCommands, session: &mut Session) -> Result<(), CliError> {
    match command {
        InventoryCommands::List { limit, json } => run_list(limit, json, session).await,
        InventoryCommands::Search { query, json } => run_search(&query, json, session).await,
        InventoryCommands::Filter {
            gender,
            brand,
            json,
        } => run_filter(gender, brand.as_deref(), json, session).await,
        InventoryCommands::Add {
            name,
            gender,
            brand,
            stock,
        } => run_add(&name, gender, &brand, stock, session).await,
        InventoryCommands::Edit {
            id,
            name,
            gender,
            brand,
            stock,
        } => run_edit(&id, name, gender, brand.as_deref(), stock, session).await,
        InventoryCommands::Delete { id } => run_delete(&id, session).await,
        InventoryCommands::Stock { id, change } => run_stock(&id, change, session).await,
        InventoryCommands::Brands { command } => run_brands(command, session).await,
        InventoryCommands::Export { format, output } => run_export(format, output, session).await,
        InventoryCommands::Theme {
            scheme,
            system_dark,
        } => run_theme(scheme, system_dark, session).await,
        InventoryCommands::Cache { command } => run_cache(command, session).await,
    }
}
