//! HTTP API Client
//!
//! Translates domain operations into HTTP requests against the
//! FindIt backend, injects the bearer token, and normalizes failures
//! into [`ApiError`]. The client is stateless request/response
//! translation except for the token itself, which it owns and
//! persists through the [`TokenStore`].
//!
//! Two rules hold for every call:
//! - a 401 response purges the stored token before the error is
//!   returned, so an invalidated session always collapses cleanly
//! - list fetches never fail: any error is logged and collapsed into
//!   an empty collection, so the feed has no "failed to load" state
//!   separate from "empty"

mod admin;
mod auth;
mod comments;
mod dms;
mod posts;
mod profiles;
mod upload;

pub use admin::ProfilePatch;

use crate::client::config::Config;
use crate::client::token_store::TokenStore;
use crate::shared::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

/// API client for the FindIt backend
pub struct ApiClient {
    config: Config,
    http: Client,
    token: RwLock<Option<String>>,
    store: TokenStore,
}

impl ApiClient {
    /// Create a client; any previously persisted token is picked up.
    pub fn new(config: Config) -> Self {
        let store = match config.token_path() {
            Some(path) => TokenStore::at(path.clone()),
            None => TokenStore::new(),
        };
        let token = RwLock::new(store.load());
        Self {
            config,
            http: Client::new(),
            token,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The bearer token currently held, if any
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is currently held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Adopt a new token: memory and durable storage, overwriting any
    /// prior token.
    pub(crate) async fn set_token(&self, token: String) {
        self.store.save(&token);
        *self.token.write().await = Some(token);
    }

    /// Drop the token from memory and durable storage
    pub(crate) async fn purge_token(&self) {
        self.store.clear();
        *self.token.write().await = None;
    }

    async fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token().await {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send a request and normalize the outcome. Non-success statuses
    /// become `Rejected` (or `Unauthorized` for a 401, which also
    /// purges the token); transport failures become `Unreachable`.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("bearer token rejected by server, clearing it");
            self.purge_token().await;
            return Err(ApiError::Unauthorized);
        }
        let detail = extract_detail(&body, status);
        tracing::debug!("request rejected: {} {}", status, detail);
        Err(ApiError::rejected(status.as_u16(), detail))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        let builder = self.authed(self.http.get(&url)).await;
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        let builder = self.authed(self.http.request(method, &url)).await.json(body);
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }

    /// Like `send_json` but the response body is ignored; used for
    /// PATCH/DELETE endpoints whose bodies carry nothing the client
    /// needs (the local cache is already consistent).
    pub(crate) async fn send_ignore_body<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url(path);
        let mut builder = self.authed(self.http.request(method, &url)).await;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder).await?;
        Ok(())
    }

    /// Fetch a list endpoint; any failure collapses to an empty vec.
    pub(crate) async fn list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        match self.get_json::<Vec<T>>(path).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("list fetch {} failed, returning empty: {}", path, e);
                Vec::new()
            }
        }
    }
}

/// Pull a human-readable detail message out of an error body. The
/// backend sends `{"detail": "..."}`; other deployments use
/// `message` or `error`. Fall back to the raw body, then the status
/// reason.
fn extract_detail(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
