//! Comment Operations

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{Comment, CommentRow, NewComment};
use reqwest::Method;

impl ApiClient {
    /// Fetch a post's comments, oldest first. Failure yields an
    /// empty list, never an error.
    pub async fn get_comments(&self, post_id: &str) -> Vec<Comment> {
        self.list::<CommentRow>(&format!("/posts/{}/comments", post_id))
            .await
            .into_iter()
            .map(Comment::from_row)
            .collect()
    }

    /// Create a comment or reply on a post
    pub async fn create_comment(
        &self,
        post_id: &str,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let row: CommentRow = self
            .send_json(Method::POST, &format!("/posts/{}/comments", post_id), comment)
            .await?;
        Ok(Comment::from_row(row))
    }
}
