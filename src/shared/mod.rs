//! Shared Types
//!
//! Data models, wire-format rows, error types, and configuration used
//! across the client.

pub mod config;
pub mod error;
pub mod escape;
pub mod models;

pub use error::{ApiError, ValidationError};
pub use escape::escape_html;
