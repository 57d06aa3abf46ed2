//! Moderation Data Structures
//!
//! Types for the admin surface: community stats, role-request
//! submissions and review, and the moderation action log.

use serde::{Deserialize, Serialize};

/// Community-wide statistics for the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStats {
    #[serde(default)]
    pub total_posts: u64,
    /// Posts not yet marked recovered
    #[serde(default)]
    pub active_posts: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub banned_users: u64,
    #[serde(default)]
    pub admins: u64,
    #[serde(default)]
    pub pending_requests: u64,
}

/// Per-user contribution stats shown on the profile sheet.
/// Points are computed server-side as `posts * 50 + comments * 10`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileStats {
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub points: u64,
}

/// Review outcome of an admin-role request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// A request to be granted a moderation role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRequest {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role_title: String,
    pub reason: String,
    pub status: ReviewStatus,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

/// Body of an admin-role request submission
#[derive(Debug, Clone, Serialize)]
pub struct NewAdminRequest {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role_title: String,
    pub reason: String,
}

/// One entry in the moderation action log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModLogEntry {
    pub id: String,
    pub admin_uid: String,
    #[serde(default)]
    pub admin_name: String,
    pub action: String,
    #[serde(default)]
    pub target_uid: Option<String>,
    #[serde(default)]
    pub target_post: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_on_sparse_body() {
        let stats: AdminStats = serde_json::from_str(r#"{"total_posts":7}"#).unwrap();
        assert_eq!(stats.total_posts, 7);
        assert_eq!(stats.banned_users, 0);
    }

    #[test]
    fn test_review_status_wire_names() {
        let json = serde_json::to_string(&ReviewStatus::Approved).unwrap();
        assert_eq!(json, r#""approved""#);
        let status: ReviewStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, ReviewStatus::Pending);
    }
}
