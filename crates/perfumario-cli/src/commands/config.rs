use perfumario_core::config::API_URL_ENV;
use perfumario_core::toast::ToastKind;

use crate::cli::ConfigCommands;
use crate::cli_config::{default_config_path, resolve_cache_path, CliConfig};
use crate::commands::common::{notify, resolve_api_config};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_api_url: Option<String>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(global_api_url),
        ConfigCommands::SetApiUrl { url } => run_config_set_api_url(&url),
    }
}

fn run_config_show(global_api_url: Option<String>) -> Result<(), CliError> {
    let config_path = default_config_path().map_err(CliError::Config)?;
    let config = CliConfig::load_from_path(&config_path).map_err(CliError::Config)?;
    let api_config = resolve_api_config(global_api_url, &config)?;

    println!("config file:   {}", config_path.display());
    println!("api url:       {}", api_config.base_url);
    println!(
        "stored url:    {}",
        config.api_base_url().as_deref().unwrap_or("(none)")
    );
    println!("env override:  {API_URL_ENV}");
    println!("cache path:    {}", resolve_cache_path(None).display());
    println!(
        "timeout:       {}s, {} retries",
        api_config.timeout.as_secs(),
        api_config.retries
    );
    Ok(())
}

fn run_config_set_api_url(url: &str) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;
    config.set_api_base_url(url).map_err(CliError::Config)?;
    let path = config.save().map_err(CliError::Config)?;

    println!("{}", path.display());
    notify(
        ToastKind::Success,
        format!(
            "API URL set to {}",
            config.api_base_url().unwrap_or_default()
        ),
    );
    Ok(())
}
