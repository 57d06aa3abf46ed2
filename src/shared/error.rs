//! Error Types
//!
//! Error taxonomy for API calls and local validation.
//!
//! # Error Categories
//!
//! - [`ApiError::Unreachable`] - transport failure, no HTTP response
//!   was obtained. Recoverable by retry; never affects the session.
//! - [`ApiError::Rejected`] - the server answered with a non-success
//!   status and a detail message. Surfaced to the user where feasible.
//! - [`ApiError::Unauthorized`] - the bearer token was rejected
//!   (HTTP 401). Forces a transition back to the anonymous state and
//!   purges the stored token.
//! - [`ValidationError`] - local input validation failed before any
//!   network call was made.
//!
//! Callers need the unreachable/rejected distinction to render
//! different messages ("check your connection" vs the server's own
//! explanation), so it is part of the type, not a string.

use thiserror::Error;

/// Failure of an API call, normalized from HTTP and transport errors.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// No HTTP response was obtained (DNS, connect, TLS, body read).
    #[error("server unreachable: {message}")]
    Unreachable {
        /// Human-readable transport error message
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {detail}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-supplied detail message, or the raw body text
        detail: String,
    },

    /// The bearer token was rejected (HTTP 401).
    #[error("not authorized")]
    Unauthorized,

    /// The response body could not be decoded as the expected shape.
    #[error("malformed response: {message}")]
    Decode {
        /// Human-readable decode error message
        message: String,
    },
}

impl ApiError {
    /// Create an unreachable error
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    /// Create a rejected error
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Whether this failure means the server could not be reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Whether this failure invalidates the current session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            // Connect, timeout, redirect, and body errors all collapse
            // to "unreachable": no usable response was obtained.
            Self::Unreachable {
                message: err.to_string(),
            }
        }
    }
}

/// Local input validation failure. Raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// The input field that failed validation
    pub field: String,
    /// Human-readable message suitable for inline display
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure of a high-level application operation.
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// Input rejected locally; nothing was sent to the server
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The API call failed after the local cache was already mutated
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error() {
        let error = ApiError::rejected(422, "title is required");
        match error {
            ApiError::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail, "title is required");
            }
            _ => panic!("Expected Rejected"),
        }
    }

    #[test]
    fn test_unreachable_is_not_unauthorized() {
        let error = ApiError::unreachable("connection refused");
        assert!(error.is_unreachable());
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_flag() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::rejected(403, "forbidden").is_unauthorized());
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::rejected(404, "post not found");
        let display = format!("{}", error);
        assert!(display.contains("404"));
        assert!(display.contains("post not found"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new("title", "cannot be empty");
        let display = format!("{}", error);
        assert!(display.contains("title"));
        assert!(display.contains("cannot be empty"));
    }

    #[test]
    fn test_app_error_from_validation() {
        let error: AppError = ValidationError::new("body", "cannot be empty").into();
        assert!(matches!(error, AppError::Validation(_)));
    }
}
