//! Authentication Operations
//!
//! Session creation (credentials or passwordless OTP), session
//! restore from the persisted token, and sign-out. Every successful
//! auth response adopts the returned token; `restore_session` and
//! `sign_out` uphold the "any doubt collapses to logged-out"
//! invariant.

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{AuthResponse, OtpAck, Profile, ProfileRow};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    handle: &'a str,
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct OtpRequestBody<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct OtpVerifyBody<'a> {
    email: &'a str,
    code: &'a str,
}

/// Response of `GET /auth/me`
#[derive(Debug, Deserialize)]
struct MeResponse {
    profile: ProfileRow,
}

impl ApiClient {
    /// Create an account. On success the returned token replaces any
    /// prior one.
    pub async fn register(
        &self,
        handle: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Profile, ApiError> {
        let body = RegisterBody {
            handle,
            name,
            email,
            password,
        };
        let auth: AuthResponse = self
            .send_json(Method::POST, "/auth/register", &body)
            .await?;
        Ok(self.adopt(auth).await)
    }

    /// Credential login
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile, ApiError> {
        let body = LoginBody { email, password };
        let auth: AuthResponse = self.send_json(Method::POST, "/auth/login", &body).await?;
        Ok(self.adopt(auth).await)
    }

    /// Ask the server to email a one-time code
    pub async fn request_otp(&self, email: &str) -> Result<OtpAck, ApiError> {
        let body = OtpRequestBody { email };
        self.send_json(Method::POST, "/auth/request-otp", &body)
            .await
    }

    /// Exchange an emailed code for a session
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<Profile, ApiError> {
        let body = OtpVerifyBody { email, code };
        let auth: AuthResponse = self
            .send_json(Method::POST, "/auth/verify-otp", &body)
            .await?;
        Ok(self.adopt(auth).await)
    }

    /// Resolve the identity behind the held token
    pub async fn me(&self) -> Result<Profile, ApiError> {
        let response: MeResponse = self.get_json("/auth/me").await?;
        Ok(Profile::from_row(response.profile))
    }

    /// Resolve any persisted session. No stored token is "no
    /// session", not an error. A stored token that fails the profile
    /// fetch for ANY reason (expired, revoked, network down) is
    /// purged and also yields "no session" — expired and unreachable
    /// are deliberately indistinguishable here.
    pub async fn restore_session(&self) -> Option<Profile> {
        if !self.has_token().await {
            return None;
        }
        match self.me().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::debug!("session restore failed, dropping token: {}", e);
                self.purge_token().await;
                None
            }
        }
    }

    /// Sign out. The server notification is best-effort; the token
    /// purge is unconditional, so sign-out always succeeds locally.
    pub async fn sign_out(&self) {
        if self.has_token().await {
            if let Err(e) = self
                .send_ignore_body::<()>(Method::POST, "/auth/logout", None)
                .await
            {
                tracing::debug!("logout notification failed (ignored): {}", e);
            }
        }
        self.purge_token().await;
    }

    async fn adopt(&self, auth: AuthResponse) -> Profile {
        self.set_token(auth.token).await;
        Profile::from_row(auth.profile)
    }
}
