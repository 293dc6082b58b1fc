use std::path::PathBuf;

use perfumario_core::api::HttpCatalogApi;
use perfumario_core::cache::CachePersister;
use perfumario_core::config::{ApiConfig, QueryPolicy, API_URL_ENV};
use perfumario_core::db::{Database, LibSqlKvRepository};
use perfumario_core::models::Brand;
use perfumario_core::services::InventoryService;
use perfumario_core::toast::{ToastKind, ToastState};
use perfumario_core::util::normalize_text_option;
use perfumario_core::Perfume;
use serde::Serialize;

use crate::cli::GlobalArgs;
use crate::cli_config::{resolve_cache_path, CliConfig};
use crate::error::CliError;

/// Open cache database plus the inventory service built on it.
pub struct Session {
    db: Database,
    pub service: InventoryService<HttpCatalogApi>,
}

impl Session {
    /// Resolve configuration, open the cache and restore persisted queries.
    pub async fn open(global: &GlobalArgs) -> Result<Self, CliError> {
        let config = CliConfig::load().map_err(CliError::Config)?;
        let api_config = resolve_api_config(global.api_url.clone(), &config)?;
        let cache_path = resolve_cache_path(global.cache_path.clone());

        let db = Database::open(&cache_path).await?;
        let policy = QueryPolicy::default();
        let cache = CachePersister::new(LibSqlKvRepository::new(db.connection()))
            .restore(&policy)
            .await?;

        let mut service =
            InventoryService::with_cache(HttpCatalogApi::new(api_config)?, policy, cache);
        service.set_offline(global.offline);
        let dropped = service.collect_garbage();
        tracing::debug!(
            base_url = service.api().base_url(),
            cached = service.cache().len(),
            dropped,
            "Opened session"
        );

        Ok(Self { db, service })
    }

    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Write the query cache back to the local store.
    pub async fn persist(&self) -> Result<(), CliError> {
        CachePersister::new(LibSqlKvRepository::new(self.db.connection()))
            .persist(self.service.cache(), self.service.policy())
            .await?;
        Ok(())
    }

    /// Remove the persisted cache snapshot.
    pub async fn remove_persisted_cache(&self) -> Result<(), CliError> {
        CachePersister::new(LibSqlKvRepository::new(self.db.connection()))
            .remove()
            .await?;
        Ok(())
    }
}

/// API base URL precedence: flag, environment, config file, default.
pub fn resolve_api_base_url(
    flag: Option<String>,
    env_value: Option<String>,
    config: &CliConfig,
) -> Option<String> {
    normalize_text_option(flag)
        .or_else(|| normalize_text_option(env_value))
        .or_else(|| config.api_base_url())
}

pub fn resolve_api_config(flag: Option<String>, config: &CliConfig) -> Result<ApiConfig, CliError> {
    let base_url = resolve_api_base_url(flag, std::env::var(API_URL_ENV).ok(), config);
    Ok(ApiConfig::resolve(base_url)?)
}

pub fn format_toast(toast: &ToastState) -> String {
    format!("[{}] {}", toast.kind, toast.message)
}

/// Report an outcome on stderr, keeping stdout for data.
pub fn notify(kind: ToastKind, message: impl Into<String>) {
    let mut toast = ToastState::new();
    toast.show(message, kind);
    eprintln!("{}", format_toast(&toast));
}

#[derive(Debug, Serialize)]
pub struct PerfumeListItem {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub brand_id: String,
    pub brand: String,
    pub stock: u32,
    pub status: String,
}

pub fn perfume_to_list_item(perfume: &Perfume, brand: &str) -> PerfumeListItem {
    PerfumeListItem {
        id: perfume.id.clone(),
        name: perfume.name.clone(),
        gender: perfume.gender.as_str().to_string(),
        brand_id: perfume.brand_id.clone(),
        brand: brand.to_string(),
        stock: perfume.stock,
        status: perfume.stock_status().label().to_string(),
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn format_perfume_lines(rows: &[(Perfume, String)]) -> Vec<String> {
    rows.iter()
        .map(|(perfume, brand)| {
            format!(
                "{}  {:<28} {:<20} {:<7} {:>4}  {}",
                short_id(&perfume.id),
                truncate(&perfume.name, 28),
                truncate(brand, 20),
                perfume.gender.label(),
                perfume.stock,
                perfume.stock_status().label()
            )
        })
        .collect()
}

pub fn format_brand_lines(brands: &[Brand]) -> Vec<String> {
    brands
        .iter()
        .map(|brand| format!("{}  {}", short_id(&brand.id), brand.name))
        .collect()
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Find a brand by ID or case-insensitive name.
pub async fn resolve_brand(
    service: &mut InventoryService<HttpCatalogApi>,
    query: &str,
) -> Result<Brand, CliError> {
    service.list_brands().await?;
    service
        .brand_directory()
        .find(query)
        .cloned()
        .ok_or_else(|| CliError::BrandNotFound(query.trim().to_string()))
}

pub fn print_perfumes(rows: &[(Perfume, String)], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let items = rows
            .iter()
            .map(|(perfume, brand)| perfume_to_list_item(perfume, brand))
            .collect::<Vec<PerfumeListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_perfume_lines(rows) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn output_path_for(output: PathBuf, file_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(file_name)
    } else {
        output
    }
}
