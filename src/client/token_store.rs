//! Token Store
//!
//! Durable storage for the one bearer token the client holds. The
//! token is the only client-side persisted state; it lives in a
//! single file under the user's config directory so a session
//! survives restarts. Storage failures are logged and tolerated: the
//! in-memory token still works for the lifetime of the process.

use std::fs;
use std::path::PathBuf;

/// File name of the persisted token
const TOKEN_FILE: &str = "fi_token";

/// Durable storage for the bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under the user's config directory
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("findit").join(TOKEN_FILE),
        }
    }

    /// Store at an explicit path (tests point this at a temp dir)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored token, if any
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let token = text.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(_) => None,
        }
    }

    /// Persist the token, overwriting any prior one
    pub fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("could not create token directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!("could not persist token: {}", e);
        }
    }

    /// Remove the stored token; idempotent
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove stored token: {}", e);
            }
        }
    }

    /// Whether a token is currently stored
    pub fn exists(&self) -> bool {
        self.load().is_some()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
