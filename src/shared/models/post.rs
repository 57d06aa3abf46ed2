//! Post Data Structure
//!
//! A lost-or-found item in the feed, denormalized with its author's
//! display fields so the feed renders without extra lookups.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a posted item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Lost,
    Found,
    Waiting,
    Recovered,
}

impl PostStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Lost => "lost",
            PostStatus::Found => "found",
            PostStatus::Waiting => "waiting",
            PostStatus::Recovered => "recovered",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Lost => "Lost",
            PostStatus::Found => "Found",
            PostStatus::Waiting => "Waiting",
            PostStatus::Recovered => "Recovered",
        }
    }

    /// Parse a wire status name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lost" => Some(PostStatus::Lost),
            "found" => Some(PostStatus::Found),
            "waiting" => Some(PostStatus::Waiting),
            "recovered" => Some(PostStatus::Recovered),
            _ => None,
        }
    }
}

/// A post in the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Server-assigned id, or a `tmp-` placeholder before confirmation
    pub id: String,
    /// Opaque server key of the author
    pub owner_id: String,
    /// Author's public username
    pub owner_handle: String,
    /// Author's display name
    pub owner_display_name: String,
    /// Author's avatar initials
    pub owner_initials: String,
    /// Author's avatar color
    pub owner_color: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub status: PostStatus,
    /// Creation time, RFC3339
    pub created_at: String,
    pub comment_count: u32,
    pub image_url: Option<String>,
}

impl Post {
    /// Build the model from a wire row. Unknown status strings fall
    /// back to `Found`, matching what the feed renders for them.
    pub fn from_row(row: PostRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.author_id,
            owner_handle: row.author_uid,
            owner_display_name: row.author_name,
            owner_initials: row.author_initials,
            owner_color: row.author_color,
            title: row.title,
            description: row.description,
            location: row.location,
            category: row.category,
            status: PostStatus::parse(&row.status).unwrap_or(PostStatus::Found),
            created_at: row.created_at,
            comment_count: row.comment_count.max(0) as u32,
            image_url: row.image_url,
        }
    }

    /// Map the model back to the wire row shape
    pub fn to_row(&self) -> PostRow {
        PostRow {
            id: self.id.clone(),
            author_id: self.owner_id.clone(),
            author_uid: self.owner_handle.clone(),
            author_name: self.owner_display_name.clone(),
            author_initials: self.owner_initials.clone(),
            author_color: self.owner_color.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            status: self.status.as_str().to_string(),
            created_at: self.created_at.clone(),
            comment_count: i64::from(self.comment_count),
            image_url: self.image_url.clone(),
        }
    }

    /// Short date label for the feed card ("Feb 12"), or the raw
    /// timestamp when it does not parse as RFC3339.
    pub fn date_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.format("%b %-d").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Post as the backend sends it (the `posts_with_author` shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    pub id: String,
    pub author_id: String,
    #[serde(default)]
    pub author_uid: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_initials: String,
    #[serde(default)]
    pub author_color: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of a post-create request
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of a post-edit request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> PostRow {
        PostRow {
            id: "42".to_string(),
            author_id: "p-1".to_string(),
            author_uid: "amir_b".to_string(),
            author_name: "Amir".to_string(),
            author_initials: "AB".to_string(),
            author_color: "#4da6ff".to_string(),
            title: "Black wallet".to_string(),
            description: "Lost near gate 3".to_string(),
            location: "Central Station".to_string(),
            category: "Wallets".to_string(),
            status: "lost".to_string(),
            created_at: "2026-02-12T09:30:00Z".to_string(),
            comment_count: 3,
            image_url: None,
        }
    }

    #[test]
    fn test_row_round_trip() {
        let row = sample_row();
        let back = Post::from_row(row.clone()).to_row();
        assert_eq!(back.id, row.id);
        assert_eq!(back.title, row.title);
        assert_eq!(back.description, row.description);
        assert_eq!(back.location, row.location);
        assert_eq!(back.category, row.category);
        assert_eq!(back.status, row.status);
        assert_eq!(back.comment_count, row.comment_count);
    }

    #[test]
    fn test_unknown_status_falls_back_to_found() {
        let mut row = sample_row();
        row.status = "misplaced".to_string();
        assert_eq!(Post::from_row(row).status, PostStatus::Found);
    }

    #[test]
    fn test_date_label() {
        let post = Post::from_row(sample_row());
        assert_eq!(post.date_label(), "Feb 12");
    }

    #[test]
    fn test_date_label_unparseable_passthrough() {
        let mut row = sample_row();
        row.created_at = "yesterday".to_string();
        assert_eq!(Post::from_row(row).date_label(), "yesterday");
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = PostPatch {
            status: Some(PostStatus::Recovered),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"status":"recovered"}"#);
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&PostStatus::Recovered).unwrap();
        assert_eq!(json, r#""recovered""#);
        assert_eq!(PostStatus::parse("waiting"), Some(PostStatus::Waiting));
        assert_eq!(PostStatus::parse("gone"), None);
    }
}
