use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use std::path::{Path, PathBuf};

/// Default backend URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("FINDIT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_default();
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Load configuration from a TOML file; the `FINDIT_API_URL`
    /// environment variable still overrides the file's server URL.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut app = AppConfig::from_file(path)?;
        if let Ok(url) = std::env::var("FINDIT_API_URL") {
            app.server_url = Some(url);
        }
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Where the bearer token is persisted, if overridden
    pub fn token_path(&self) -> Option<&PathBuf> {
        self.app.token_path.as_ref()
    }
}
