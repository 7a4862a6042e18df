// ABOUTME: Application configuration loaded from ~/.pluck/config.toml with env overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the profile store base URL
pub const PROFILE_API_ENV: &str = "PLUCK_PROFILE_API";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted profile data store
    #[serde(default = "default_profile_api_url")]
    pub profile_api_url: String,

    /// HTTP timeout for profile queries, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_api_url: default_profile_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_profile_api_url() -> String {
    "https://api.pluck.link".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from the default location. A missing file yields
    /// the defaults; the env override applies on top either way.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read and parse a config file at an explicit path
    fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pluck").join("config.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(PROFILE_API_ENV) {
            if !url.trim().is_empty() {
                self.profile_api_url = url;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.profile_api_url, "https://api.pluck.link");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: AppConfig =
            toml::from_str("profile_api_url = \"http://localhost:8080\"").unwrap();
        assert_eq!(config.profile_api_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "profile_api_url = \"http://localhost:9000\"\nrequest_timeout_secs = 5\n")
            .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.profile_api_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "profile_api_url = [not toml").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
