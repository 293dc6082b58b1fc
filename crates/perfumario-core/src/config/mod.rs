//! Client configuration.
//!
//! API endpoint discovery, request timing and query cache freshness rules
//! shared by every Perfumario front end.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::Gender;
use crate::util::{is_http_url, normalize_text_option};

/// Production API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://perfumario-server.vercel.app";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "PERFUMARIO_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRIES: u32 = 3;
const DEFAULT_MUTATION_RETRIES: u32 = 1;
const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

/// HTTP settings for the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Extra attempts for reads after a transient failure
    pub retries: u32,
    /// Extra attempts for writes after a transient failure
    pub mutation_retries: u32,
    pub retry_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
            mutation_retries: DEFAULT_MUTATION_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl ApiConfig {
    /// Build a config for an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            ..Self::default()
        })
    }

    /// Resolve the base URL: explicit value, then `PERFUMARIO_API_URL`, then
    /// the production default.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let env_value = std::env::var(API_URL_ENV).ok();
        Self::resolve_from(explicit, env_value)
    }

    fn resolve_from(explicit: Option<String>, env_value: Option<String>) -> Result<Self> {
        let base_url = normalize_text_option(explicit)
            .or_else(|| normalize_text_option(env_value))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    #[must_use]
    pub fn endpoints(&self) -> Endpoints<'_> {
        Endpoints {
            base_url: &self.base_url,
        }
    }
}

/// Normalize an API base URL, requiring an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

/// REST endpoint URLs for perfumes and brands.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints<'a> {
    base_url: &'a str,
}

impl Endpoints<'_> {
    #[must_use]
    pub fn perfumes(&self) -> String {
        format!("{}/perfumes", self.base_url)
    }

    #[must_use]
    pub fn perfume(&self, id: &str) -> String {
        format!("{}/perfumes/{}", self.base_url, urlencoding::encode(id))
    }

    #[must_use]
    pub fn perfume_search(&self, query: &str) -> String {
        format!(
            "{}/perfumes/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    #[must_use]
    pub fn perfumes_by_gender(&self, gender: Gender) -> String {
        format!("{}/perfumes/gender/{}", self.base_url, gender.as_str())
    }

    #[must_use]
    pub fn perfumes_by_brand(&self, brand_id: &str) -> String {
        format!(
            "{}/perfumes/brand/{}",
            self.base_url,
            urlencoding::encode(brand_id)
        )
    }

    #[must_use]
    pub fn brands(&self) -> String {
        format!("{}/brands", self.base_url)
    }

    #[must_use]
    pub fn brand(&self, id: &str) -> String {
        format!("{}/brands/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Freshness rules for cached query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Default time a result stays fresh
    pub stale_time: Duration,
    pub brands_stale_time: Duration,
    pub search_stale_time: Duration,
    pub filter_stale_time: Duration,
    /// Entries untouched for longer than this are dropped
    pub gc_time: Duration,
    /// Oldest persisted snapshot accepted on restore
    pub persist_max_age: Duration,
    /// Changing this discards every persisted snapshot
    pub buster: String,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            brands_stale_time: Duration::from_secs(30 * 60),
            search_stale_time: Duration::from_secs(2 * 60),
            filter_stale_time: Duration::from_secs(2 * 60),
            gc_time: Duration::from_secs(24 * 60 * 60),
            persist_max_age: Duration::from_secs(24 * 60 * 60),
            buster: String::new(),
        }
    }
}
