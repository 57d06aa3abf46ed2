//! Moderation Operations
//!
//! The admin surface: user management, community stats, role-request
//! review, and the moderation log. All of these require an admin
//! token; a non-admin caller gets a `Rejected` with a 403.

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{
    AdminRequest, AdminStats, ModLogEntry, NewAdminRequest, Profile, ProfileRow, ReviewStatus,
    Role,
};
use reqwest::Method;
use serde::Serialize;

/// Body of a profile moderation patch; absent fields are unchanged
#[derive(Debug, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The backend stores this as a 0/1 integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_banned: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ReviewBody<'a> {
    status: ReviewStatus,
    reviewed_by: &'a str,
    reviewed_at: String,
}

#[derive(Debug, Serialize)]
struct LogActionBody<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_uid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_post: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

impl ApiClient {
    /// All registered users. Failure yields an empty list.
    pub async fn get_all_users(&self) -> Vec<Profile> {
        self.list::<ProfileRow>("/admin/users")
            .await
            .into_iter()
            .map(Profile::from_row)
            .collect()
    }

    /// Patch a user's moderation fields
    pub async fn update_profile(&self, id: &str, patch: &ProfilePatch) -> Result<(), ApiError> {
        self.send_ignore_body(Method::PATCH, &format!("/admin/profiles/{}", id), Some(patch))
            .await
    }

    /// Change a user's role
    pub async fn set_role(&self, user_id: &str, role: Role) -> Result<(), ApiError> {
        self.update_profile(
            user_id,
            &ProfilePatch {
                role: Some(role),
                ..Default::default()
            },
        )
        .await
    }

    /// Ban a user
    pub async fn ban_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.update_profile(
            user_id,
            &ProfilePatch {
                is_banned: Some(1),
                ..Default::default()
            },
        )
        .await
    }

    /// Lift a ban
    pub async fn unban_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.update_profile(
            user_id,
            &ProfilePatch {
                is_banned: Some(0),
                ..Default::default()
            },
        )
        .await
    }

    /// Community-wide stats for the dashboard
    pub async fn get_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/stats").await
    }

    /// Submit a request to be granted a moderation role
    pub async fn submit_admin_request(&self, request: &NewAdminRequest) -> Result<(), ApiError> {
        self.send_ignore_body(Method::POST, "/admin/requests", Some(request))
            .await
    }

    /// Role requests awaiting review. Failure yields an empty list.
    pub async fn get_pending_requests(&self) -> Vec<AdminRequest> {
        self.list("/admin/requests/pending").await
    }

    /// Record the outcome of a role-request review
    pub async fn review_request(
        &self,
        request_id: &str,
        status: ReviewStatus,
        reviewer_id: &str,
    ) -> Result<(), ApiError> {
        let body = ReviewBody {
            status,
            reviewed_by: reviewer_id,
            reviewed_at: chrono::Utc::now().to_rfc3339(),
        };
        self.send_ignore_body(
            Method::PATCH,
            &format!("/admin/requests/{}", request_id),
            Some(&body),
        )
        .await
    }

    /// Append an entry to the moderation log. Best-effort: the
    /// moderation action itself already succeeded, so a failed log
    /// append is warned about and otherwise ignored.
    pub async fn log_action(
        &self,
        action: &str,
        target_uid: Option<&str>,
        target_post: Option<&str>,
        note: Option<&str>,
    ) {
        let body = LogActionBody {
            action,
            target_uid,
            target_post,
            note,
        };
        if let Err(e) = self
            .send_ignore_body(Method::POST, "/admin/logs", Some(&body))
            .await
        {
            tracing::warn!("mod-log append failed (ignored): {}", e);
        }
    }

    /// Recent moderation log entries. Failure yields an empty list.
    pub async fn get_mod_logs(&self) -> Vec<ModLogEntry> {
        self.list("/admin/logs").await
    }
}
