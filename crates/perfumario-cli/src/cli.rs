use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use perfumario_core::export::ExportFormat;
use perfumario_core::models::ColorScheme;
use perfumario_core::Gender;

#[derive(Parser)]
#[command(name = "perfumario")]
#[command(about = "Manage the perfume inventory from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Catalog API base URL (overrides env and config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Optional path to the local cache database
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Serve reads from the local cache only
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Inventory(InventoryCommands),
    /// Show or update CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Commands that run against the catalog and the local query cache.
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List perfumes with their brand
    #[command(alias = "ls")]
    List {
        /// Maximum number of perfumes to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search perfumes by name
    Search {
        /// Search query (at least 2 characters)
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Filter perfumes by gender and/or brand
    Filter {
        #[arg(short, long, value_enum)]
        gender: Option<GenderArg>,
        /// Brand ID or name
        #[arg(short, long, value_name = "BRAND")]
        brand: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a perfume
    #[command(alias = "new")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Brand ID or name
        #[arg(long, value_name = "BRAND")]
        brand: String,
        #[arg(long, default_value_t = 0)]
        stock: u32,
    },
    /// Edit an existing perfume
    Edit {
        /// Perfume ID or unique ID prefix
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        /// Brand ID or name
        #[arg(long, value_name = "BRAND")]
        brand: Option<String>,
        #[arg(long)]
        stock: Option<u32>,
    },
    /// Delete a perfume
    Delete {
        /// Perfume ID or unique ID prefix
        id: String,
    },
    /// Change stock by a signed amount, e.g. `stock 3fa2 -1`
    Stock {
        /// Perfume ID or unique ID prefix
        id: String,
        #[arg(allow_negative_numbers = true)]
        change: i64,
    },
    /// Manage brands
    Brands {
        #[command(subcommand)]
        command: BrandCommands,
    },
    /// Export the inventory report
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormatArg::Html)]
        format: ExportFormatArg,
        /// Output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show or set the color scheme
    Theme {
        #[arg(value_enum)]
        scheme: Option<ColorSchemeArg>,
        /// Treat the system appearance as dark when resolving `auto`
        #[arg(long)]
        system_dark: bool,
    },
    /// Manage the local query cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
pub enum BrandCommands {
    /// List brands
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a brand
    Add { name: String },
    /// Delete a brand by ID or name
    Delete { brand: String },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Drop all cached query results
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Store the catalog API base URL
    SetApiUrl { url: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Unisex,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Unisex => Self::Unisex,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormatArg {
    Html,
    Json,
    Markdown,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Html => Self::Html,
            ExportFormatArg::Json => Self::Json,
            ExportFormatArg::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorSchemeArg {
    Light,
    Dark,
    Auto,
}

impl From<ColorSchemeArg> for ColorScheme {
    fn from(value: ColorSchemeArg) -> Self {
        match value {
            ColorSchemeArg::Light => Self::Light,
            ColorSchemeArg::Dark => Self::Dark,
            ColorSchemeArg::Auto => Self::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
