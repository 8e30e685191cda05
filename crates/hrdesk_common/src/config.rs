//! Configuration for HR Desk.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order: explicit
//! path, `$HRDESK_CONFIG`, `<config_dir>/hrdesk/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "HRDESK_CONFIG";

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Name of the env var holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/v1".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_token_env() -> String {
    "HRDESK_API_TOKEN".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            token_env: default_token_env(),
        }
    }
}

/// Answer rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Maximum list rows rendered per answer
    #[serde(default = "default_max_list_items")]
    pub max_list_items: usize,
}

fn default_max_list_items() -> usize {
    10
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_list_items: default_max_list_items(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HrDeskConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl HrDeskConfig {
    /// Implicit config location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join("hrdesk").join("config.toml"))
    }

    /// Parse a config file. Any failure is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config.
    ///
    /// An explicit path must exist and parse. The implicit path falls back to
    /// defaults when missing or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let Some(path) = Self::default_path() else {
            debug!("No config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Serialize to TOML (used by `hrdeskctl config`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HrDeskConfig::default();
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.api.token_env, "HRDESK_API_TOKEN");
        assert_eq!(config.assistant.max_list_items, 10);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://hr.example.com/api\"").unwrap();

        let config = HrDeskConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://hr.example.com/api");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.assistant.max_list_items, 10);
    }

    #[test]
    fn test_explicit_malformed_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        assert!(HrDeskConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(HrDeskConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = HrDeskConfig::default();
        config.assistant.max_list_items = 3;
        let text = config.to_toml().unwrap();
        let parsed: HrDeskConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
