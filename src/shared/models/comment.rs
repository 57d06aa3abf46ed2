//! Comment Data Structure
//!
//! A comment on a post. Comments form a tree keyed by `parent_id`
//! (absent = top-level); thread assembly lives in `client::threads`.

use serde::{Deserialize, Serialize};

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_handle: String,
    pub author_display_name: String,
    pub author_initials: String,
    pub author_color: String,
    pub body: String,
    pub image_url: Option<String>,
    /// Id of the comment this replies to; `None` for top-level.
    /// The server guarantees a present parent is on the same post;
    /// the client tolerates a parent missing locally.
    pub parent_id: Option<String>,
    /// Creation time, RFC3339
    pub created_at: String,
}

impl Comment {
    /// Build the model from a wire row
    pub fn from_row(row: CommentRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            author_handle: row.author_uid,
            author_display_name: row.author_name,
            author_initials: row.author_initials,
            author_color: row.author_color,
            body: row.body,
            image_url: row.image_url,
            parent_id: row.parent_id,
            created_at: row.created_at,
        }
    }

    /// Whether this is a top-level comment
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Comment as the backend sends it, joined with author display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRow {
    pub id: String,
    pub post_id: String,
    #[serde(default)]
    pub author_uid: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_initials: String,
    #[serde(default)]
    pub author_color: String,
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of a comment-create request; optional fields are omitted
/// from the JSON entirely when absent
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_omits_absent_fields() {
        let body = NewComment {
            body: "is it still there?".to_string(),
            parent_id: None,
            image_url: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"body":"is it still there?"}"#);
    }

    #[test]
    fn test_new_comment_with_parent() {
        let body = NewComment {
            body: "yes".to_string(),
            parent_id: Some("c-1".to_string()),
            image_url: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""parent_id":"c-1""#));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_from_row_top_level() {
        let row: CommentRow = serde_json::from_str(
            r#"{"id":"c-1","post_id":"42","body":"saw it this morning"}"#,
        )
        .unwrap();
        let comment = Comment::from_row(row);
        assert!(comment.is_top_level());
        assert_eq!(comment.post_id, "42");
    }
}
