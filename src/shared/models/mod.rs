//! Data Models
//!
//! Internal model types plus the snake_case wire rows the backend
//! speaks. Each model has a `from_row` constructor; the wire rows are
//! plain serde structs so the HTTP layer never leaks into state code.

mod admin;
mod comment;
mod dm;
mod post;
mod profile;

pub use admin::{
    AdminRequest, AdminStats, ModLogEntry, NewAdminRequest, ProfileStats, ReviewStatus,
};
pub use comment::{Comment, CommentRow, NewComment};
pub use dm::{Conversation, ConversationRow, DirectMessage, DirectMessageRow, NewDirectMessage};
pub use post::{NewPost, Post, PostPatch, PostRow, PostStatus};
pub use profile::{AuthResponse, OtpAck, Profile, ProfileRow, Role};
