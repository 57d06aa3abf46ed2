//! Direct Message Data Structures
//!
//! Thread list entries and individual messages for one-to-one
//! conversations between users.

use serde::{Deserialize, Serialize};

/// A conversation with another user, as shown in the thread list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    /// The other participant's public username
    pub other_uid: String,
    pub other_name: String,
    pub other_initials: String,
    pub other_color: String,
    /// Preview of the last message
    pub last_body: String,
    /// Timestamp of the last message, RFC3339
    pub last_at: String,
    pub unread_count: u32,
}

impl Conversation {
    /// Build the model from a wire row
    pub fn from_row(row: ConversationRow) -> Self {
        Self {
            other_uid: row.other_uid,
            other_name: row.other_name,
            other_initials: row.other_initials,
            other_color: row.other_color,
            last_body: row.last_body,
            last_at: row.last_at,
            unread_count: row.unread_count.max(0) as u32,
        }
    }
}

/// Conversation as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRow {
    pub other_uid: String,
    #[serde(default)]
    pub other_name: String,
    #[serde(default)]
    pub other_initials: String,
    #[serde(default)]
    pub other_color: String,
    #[serde(default)]
    pub last_body: String,
    #[serde(default)]
    pub last_at: String,
    #[serde(default)]
    pub unread_count: i64,
}

/// A single direct message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectMessage {
    pub id: String,
    pub from_uid: String,
    pub to_uid: String,
    pub body: String,
    /// Creation time, RFC3339
    pub created_at: String,
}

impl DirectMessage {
    /// Build the model from a wire row
    pub fn from_row(row: DirectMessageRow) -> Self {
        Self {
            id: row.id,
            from_uid: row.from_uid,
            to_uid: row.to_uid,
            body: row.body,
            created_at: row.created_at,
        }
    }

    /// Whether the given user sent this message
    pub fn is_mine(&self, current_uid: &str) -> bool {
        self.from_uid == current_uid
    }
}

/// Direct message as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectMessageRow {
    pub id: String,
    pub from_uid: String,
    pub to_uid: String,
    pub body: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of a send-message request
#[derive(Debug, Clone, Serialize)]
pub struct NewDirectMessage {
    pub body: String,
}
