//! Session State Machine
//!
//! Tracks who is using the app. Three states, five transitions:
//!
//! ```text
//! Anonymous --submit credentials / boot restore--> Authenticating
//! Authenticating --{token, profile}--> Authenticated
//! Authenticating --any failure-------> Anonymous
//! Authenticated --sign-out-----------> Anonymous
//! Authenticated --401 on any call----> Anonymous (token purged)
//! ```
//!
//! Submitting new credentials while already authenticated signs the
//! current session out first, so the token and the session identity
//! can never describe different users.
//!
//! There is no refresh-token sub-state: the client holds exactly one
//! bearer token until the server rejects it. Invalid transitions are
//! logged and ignored, never panics.

use crate::client::api::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{OtpAck, Profile};
use std::sync::Arc;

/// Authentication state of the running client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in
    Anonymous,
    /// Credentials submitted or restore in flight
    Authenticating,
    /// Signed in as this identity
    Authenticated(Profile),
}

impl Session {
    /// Short name for logging
    fn name(&self) -> &'static str {
        match self {
            Session::Anonymous => "anonymous",
            Session::Authenticating => "authenticating",
            Session::Authenticated(_) => "authenticated",
        }
    }
}

/// Owns the session state and drives transitions through the API
/// client.
pub struct SessionManager {
    api: Arc<ApiClient>,
    session: Session,
}

impl SessionManager {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            session: Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The signed-in identity, if any
    pub fn profile(&self) -> Option<&Profile> {
        match &self.session {
            Session::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.profile().map(Profile::is_admin).unwrap_or(false)
    }

    pub fn is_super_admin(&self) -> bool {
        self.profile().map(Profile::is_super_admin).unwrap_or(false)
    }

    /// Boot-time restore from the persisted token. Returns whether a
    /// session was restored.
    pub async fn restore(&mut self) -> bool {
        self.begin_authenticating();
        match self.api.restore_session().await {
            Some(profile) => {
                self.finish(Some(profile));
                true
            }
            None => {
                self.finish(None);
                false
            }
        }
    }

    /// Credential login. An existing session is signed out first, so
    /// the held token and the session identity always describe the
    /// same user.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.ensure_anonymous().await;
        self.begin_authenticating();
        let result = self.api.login(email, password).await;
        self.settle(result)
    }

    /// Account creation; signs out any existing session first
    pub async fn register(
        &mut self,
        handle: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.ensure_anonymous().await;
        self.begin_authenticating();
        let result = self.api.register(handle, name, email, password).await;
        self.settle(result)
    }

    /// Step 1 of passwordless login: ask for an emailed code. Does
    /// not change session state; the user is still anonymous until
    /// the code is verified.
    pub async fn request_code(&self, email: &str) -> Result<OtpAck, ApiError> {
        self.api.request_otp(email).await
    }

    /// Step 2 of passwordless login: verify the emailed code. Signs
    /// out any existing session first.
    pub async fn verify_code(&mut self, email: &str, code: &str) -> Result<(), ApiError> {
        self.ensure_anonymous().await;
        self.begin_authenticating();
        let result = self.api.verify_otp(email, code).await;
        self.settle(result)
    }

    /// Sign out; always succeeds locally
    pub async fn sign_out(&mut self) {
        self.api.sign_out().await;
        self.transition(Session::Anonymous);
    }

    /// Apply the session consequence of a failed API call: a rejected
    /// token forces the collapse to anonymous. All other failures
    /// leave the session alone.
    pub fn handle_api_error(&mut self, error: &ApiError) {
        if error.is_unauthorized() && self.is_authenticated() {
            tracing::warn!("session invalidated by server, signing out locally");
            self.transition(Session::Anonymous);
        }
    }

    /// A 401 inside a list fetch purges the token without surfacing
    /// an error; call after such fetches so the session follows the
    /// token instead of outliving it.
    pub async fn collapse_if_token_lost(&mut self) {
        if self.is_authenticated() && !self.api.has_token().await {
            tracing::warn!("token lost mid-session, signing out locally");
            self.transition(Session::Anonymous);
        }
    }

    /// New authentication replaces the old session wholesale; a
    /// lingering one would leave the token and the profile describing
    /// different users.
    async fn ensure_anonymous(&mut self) {
        if !matches!(self.session, Session::Anonymous) {
            tracing::warn!(
                "new authentication while {}, signing out first",
                self.session.name()
            );
            self.api.sign_out().await;
            self.transition(Session::Anonymous);
        }
    }

    fn begin_authenticating(&mut self) {
        match self.session {
            Session::Anonymous => self.transition(Session::Authenticating),
            _ => {
                tracing::warn!(
                    "ignoring authentication attempt while {}",
                    self.session.name()
                );
            }
        }
    }

    fn settle(&mut self, result: Result<Profile, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(profile) => {
                self.finish(Some(profile));
                Ok(())
            }
            Err(e) => {
                self.finish(None);
                Err(e)
            }
        }
    }

    fn finish(&mut self, profile: Option<Profile>) {
        if self.session != Session::Authenticating {
            tracing::warn!("authentication settled while {}", self.session.name());
            return;
        }
        match profile {
            Some(profile) => self.transition(Session::Authenticated(profile)),
            None => self.transition(Session::Anonymous),
        }
    }

    fn transition(&mut self, next: Session) {
        tracing::debug!("session: {} -> {}", self.session.name(), next.name());
        self.session = next;
    }
}
