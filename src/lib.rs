//! FindIt - Client Library
//!
//! FindIt is a community "lost and found" feed: people post items they
//! lost or found, comment on each other's posts, exchange direct
//! messages, and administrators moderate the community. This crate is
//! the headless client for the FindIt backend.
//!
//! # Overview
//!
//! The library provides:
//! - An HTTP API client covering auth, posts, comments, direct
//!   messages, image upload, and moderation
//! - Bearer-token lifecycle management with durable local persistence
//! - A session state machine tracking who is signed in
//! - An in-memory feed cache with optimistic local mutation and
//!   server reconciliation
//! - Comment-thread assembly for nested replies
//!
//! # Module Structure
//!
//! - **`shared`** - Data models, wire rows, error types, configuration
//! - **`client`** - API client, token store, session and feed state
//!
//! # Usage
//!
//! ```rust,no_run
//! use findit::client::{AppContext, Config};
//!
//! # async fn example() {
//! let mut app = AppContext::new(Config::new());
//! app.init().await;
//! for post in app.feed().apply_filters() {
//!     println!("{}: {}", post.owner_handle, post.title);
//! }
//! # }
//! ```
//!
//! # Error Handling
//!
//! Network operations return `Result<T, ApiError>`; the error
//! taxonomy distinguishes an unreachable server from a server-side
//! rejection so callers can render different messages. List fetches
//! swallow failures into an empty collection so the feed never has a
//! separate "failed to load" state. See `shared::error` for details.

/// Shared types and data structures
pub mod shared;

/// Client-side state and HTTP API access
pub mod client;
