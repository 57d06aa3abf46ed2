//! Application configuration module
//!
//! Provides configuration types for the client: the backend base URL
//! and an optional override for where the bearer token is persisted.
//! Configuration can be built programmatically, loaded from a TOML
//! file, or taken from the environment (see `client::config`).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Backend base URL
    pub server_url: Option<String>,
    /// Override for the token file location (tests use a temp dir)
    pub token_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let server_url = file.server.and_then(|s| s.url);
        if let Some(url) = &server_url {
            validate_url(url)?;
        }
        Ok(Self {
            server_url,
            token_path: file.storage.and_then(|s| s.token_path),
        })
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    token_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the backend base URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the token file location
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        if let Some(url) = &self.server_url {
            validate_url(url)?;
        }
        Ok(AppConfig {
            server_url: self.server_url,
            token_path: self.token_path,
        })
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

/// On-disk configuration file shape
#[derive(Debug, Deserialize)]
struct ConfigFile {
    server: Option<ServerSection>,
    storage: Option<StorageSection>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StorageSection {
    token_path: Option<PathBuf>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config file error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .server_url("https://findit.example.com")
            .build()
            .unwrap();
        assert_eq!(
            config.server_url.as_deref(),
            Some("https://findit.example.com")
        );
        assert!(config.token_path.is_none());
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = AppConfig::builder().server_url("findit.example.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            url = "http://127.0.0.1:8000"

            [storage]
            token_path = "/tmp/fi_token"
            "#,
        )
        .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(
            config.token_path,
            Some(PathBuf::from("/tmp/fi_token"))
        );
    }

    #[test]
    fn test_from_toml_str_empty_sections() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.server_url.is_none());
        assert!(config.token_path.is_none());
    }
}
