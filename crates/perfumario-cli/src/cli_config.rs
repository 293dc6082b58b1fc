//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use perfumario_core::config::normalize_base_url;
use perfumario_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
const CACHE_FILE_NAME: &str = "cache.db";
const APP_DIR_NAME: &str = "perfumario";

pub const CACHE_PATH_ENV: &str = "PERFUMARIO_CACHE_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

pub fn default_cache_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CACHE_FILE_NAME)
}

/// Flag, then `PERFUMARIO_CACHE_PATH`, then the platform data dir.
pub fn resolve_cache_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CACHE_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_cache_path)
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    pub fn api_base_url(&self) -> Option<String> {
        normalize_text_option(self.api_base_url.clone())
    }

    /// Validate and store an API base URL.
    pub fn set_api_base_url(&mut self, url: &str) -> Result<(), String> {
        let normalized = normalize_base_url(url).map_err(|error| error.to_string())?;
        self.api_base_url = Some(normalized);
        Ok(())
    }

    fn normalize(&mut self) {
        self.api_base_url = normalize_text_option(self.api_base_url.clone());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let tmp = tempdir().unwrap();
        let config = CliConfig::load_from_path(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn config_roundtrip_normalizes_url() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join(CONFIG_FILE_NAME);

        let config = CliConfig {
            version: 1,
            api_base_url: Some("  https://inventory.example.com  ".to_string()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(
            loaded.api_base_url().as_deref(),
            Some("https://inventory.example.com")
        );
    }

    #[test]
    fn set_api_base_url_requires_http_scheme() {
        let mut config = CliConfig::default();
        assert!(config.set_api_base_url("inventory.example.com").is_err());
        config
            .set_api_base_url("https://inventory.example.com/")
            .unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://inventory.example.com")
        );
    }

    #[test]
    fn corrupt_file_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{").unwrap();
        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.starts_with("Failed to parse config"));
    }

    #[test]
    fn explicit_cache_path_wins() {
        let path = PathBuf::from("/tmp/perfumario-test.db");
        assert_eq!(resolve_cache_path(Some(path.clone())), path);
    }
}
