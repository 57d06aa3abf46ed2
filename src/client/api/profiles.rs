//! Profile Operations
//!
//! The public profile sheet: contribution stats and post history.

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{Post, PostRow, ProfileStats};

impl ApiClient {
    /// Contribution stats for a user (posts, comments, points)
    pub async fn get_profile_stats(&self, uid: &str) -> Result<ProfileStats, ApiError> {
        self.get_json(&format!("/profiles/{}/stats", uid)).await
    }

    /// All posts by a user, for the profile history. Failure yields
    /// an empty list.
    pub async fn get_posts_by_user(&self, uid: &str) -> Vec<Post> {
        self.list::<PostRow>(&format!("/profiles/{}/posts", uid))
            .await
            .into_iter()
            .map(Post::from_row)
            .collect()
    }
}
