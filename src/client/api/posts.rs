//! Post Operations

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{NewPost, Post, PostPatch, PostRow};
use reqwest::Method;

impl ApiClient {
    /// Fetch the full feed, newest first. Failure yields an empty
    /// feed, never an error.
    pub async fn get_posts(&self) -> Vec<Post> {
        self.list::<PostRow>("/posts")
            .await
            .into_iter()
            .map(Post::from_row)
            .collect()
    }

    /// Create a post; returns the authoritative server record
    pub async fn create_post(&self, fields: &NewPost) -> Result<Post, ApiError> {
        let row: PostRow = self.send_json(Method::POST, "/posts", fields).await?;
        Ok(Post::from_row(row))
    }

    /// Edit a post in place
    pub async fn update_post(&self, id: &str, patch: &PostPatch) -> Result<(), ApiError> {
        self.send_ignore_body(Method::PATCH, &format!("/posts/{}", id), Some(patch))
            .await
    }

    /// Delete a post (soft delete server-side)
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.send_ignore_body::<()>(Method::DELETE, &format!("/posts/{}", id), None)
            .await
    }
}
