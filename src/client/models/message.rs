//! Messaging models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, require_text, timestamp, Post, UserProfile};
use crate::error::Result;

/// A direct message about a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub post_id: u64,
    pub sender_id: u64,
    pub receiver_id: u64,
    pub is_read: bool,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    pub sender: UserProfile,
    pub receiver: UserProfile,
}

/// Inbox row: one conversation per (listing, counterpart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxConversation {
    pub post: Post,
    pub other_user: UserProfile,
    pub last_message: Message,
}

impl InboxConversation {
    /// The last message came from the other side and has not been read
    pub fn is_unread_for(&self, current_user_id: u64) -> bool {
        self.last_message.sender_id != current_user_id && !self.last_message.is_read
    }
}

/// Outgoing message
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub content: String,
    pub post_id: u64,
    pub receiver_id: u64,
}

impl CreateMessageRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("content", &self.content)?;
        require_id("post_id", self.post_id)?;
        require_id("receiver_id", self.receiver_id)
    }
}

/// Response of the mark-read endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarkReadResponse {
    pub updated_count: u32,
}
