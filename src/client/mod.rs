//! Client-Side State and HTTP Access
//!
//! Everything the running client owns: the API client and its bearer
//! token, the session state machine, the optimistic feed cache, and
//! the application context that wires them together.

pub mod api;
pub mod app;
pub mod config;
pub mod feed;
pub mod optimistic;
pub mod session;
pub mod threads;
pub mod token_store;

pub use api::ApiClient;
pub use app::AppContext;
pub use config::Config;
pub use feed::{FeedFilter, FeedState};
pub use optimistic::{is_placeholder_id, OptimisticTracker};
pub use session::{Session, SessionManager};
pub use token_store::TokenStore;
