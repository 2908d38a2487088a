//! Messaging display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_local, truncate_string};
use crate::client::models::{InboxConversation, Message};

/// Inbox row: one per conversation
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InboxDisplay {
    #[tabled(rename = "POST")]
    pub post_id: u64,

    #[tabled(rename = "LISTING")]
    pub listing: String,

    #[tabled(rename = "WITH")]
    pub other_user: String,

    #[tabled(rename = "USER ID")]
    pub other_user_id: u64,

    #[tabled(rename = "LAST MESSAGE")]
    pub last_message: String,

    #[tabled(rename = "AT")]
    pub at: String,

    #[tabled(rename = "NEW")]
    pub unread: bool,
}

impl InboxDisplay {
    pub fn new(conversation: &InboxConversation, current_user_id: u64) -> Self {
        Self {
            post_id: conversation.post.id,
            listing: truncate_string(&conversation.post.title, 30),
            other_user: conversation.other_user.username.clone(),
            other_user_id: conversation.other_user.id,
            last_message: truncate_string(&conversation.last_message.content, 40),
            at: format_local(&conversation.last_message.created_at),
            unread: conversation.is_unread_for(current_user_id),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MessageDisplay {
    #[tabled(rename = "AT")]
    pub at: String,

    #[tabled(rename = "FROM")]
    pub from: String,

    #[tabled(rename = "MESSAGE")]
    pub content: String,

    #[tabled(rename = "READ")]
    pub is_read: bool,
}

impl From<&Message> for MessageDisplay {
    fn from(message: &Message) -> Self {
        Self {
            at: format_local(&message.created_at),
            from: message.sender.username.clone(),
            content: message.content.clone(),
            is_read: message.is_read,
        }
    }
}

/// Chat transcript, own messages right-aligned
pub fn format_chat(messages: &[Message], current_user_id: u64) -> String {
    if messages.is_empty() {
        return "No messages yet.".to_string();
    }

    let mut out = String::new();
    for message in messages {
        let stamp = format_local(&message.created_at).dimmed();
        if message.sender_id == current_user_id {
            out.push_str(&format!("{:>60}\n", format!("{}  {}", message.content, stamp)));
        } else {
            out.push_str(&format!(
                "{}: {}  {}\n",
                message.sender.username.cyan(),
                message.content,
                stamp
            ));
        }
    }
    out
}
