//! Messaging API trait

use async_trait::async_trait;

use crate::client::models::{CreateMessageRequest, InboxConversation, Message};
use crate::error::Result;

/// Messaging operations
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn send_message(&self, request: &CreateMessageRequest) -> Result<Message>;

    /// Messages between the caller and `other_user_id` about one listing, oldest first
    async fn get_conversation(&self, post_id: u64, other_user_id: u64) -> Result<Vec<Message>>;

    /// Latest message of every conversation the caller takes part in
    async fn get_inbox(&self) -> Result<Vec<InboxConversation>>;

    /// Mark incoming messages of a conversation read. Returns how many changed.
    async fn mark_conversation_read(&self, post_id: u64, other_user_id: u64) -> Result<u32>;
}
