//! Direct Message Operations

use super::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::models::{
    Conversation, ConversationRow, DirectMessage, DirectMessageRow, NewDirectMessage,
};
use reqwest::Method;

impl ApiClient {
    /// Thread list for the current user. Failure yields an empty
    /// list, never an error.
    pub async fn get_conversations(&self) -> Vec<Conversation> {
        self.list::<ConversationRow>("/dms/conversations")
            .await
            .into_iter()
            .map(Conversation::from_row)
            .collect()
    }

    /// Messages exchanged with one other user, oldest first. Failure
    /// yields an empty list.
    pub async fn get_thread(&self, other_uid: &str) -> Vec<DirectMessage> {
        self.list::<DirectMessageRow>(&format!("/dms/{}", other_uid))
            .await
            .into_iter()
            .map(DirectMessage::from_row)
            .collect()
    }

    /// Send a message to another user
    pub async fn send_dm(&self, other_uid: &str, body: &str) -> Result<DirectMessage, ApiError> {
        let message = NewDirectMessage {
            body: body.to_string(),
        };
        let row: DirectMessageRow = self
            .send_json(Method::POST, &format!("/dms/{}", other_uid), &message)
            .await?;
        Ok(DirectMessage::from_row(row))
    }
}
