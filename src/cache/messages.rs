//! Messaging facade
//!
//! Messages are polled and must be fresh, so nothing here touches the cache.

use async_trait::async_trait;
use log::warn;

use super::CachedMarketClient;
use crate::client::MarketApi;
use crate::client::api::MessageApi;
use crate::client::models::{CreateMessageRequest, InboxConversation, Message, require_id};
use crate::error::Result;

impl<C: MarketApi> CachedMarketClient<C> {
    /// Conversations whose last message came from the other side and is unread.
    ///
    /// Fetches the whole inbox. Any failure reads as zero.
    pub async fn unread_count(&self, current_user_id: u64) -> u32 {
        match self.inner.get_inbox().await {
            Ok(inbox) => inbox
                .iter()
                .filter(|conversation| conversation.is_unread_for(current_user_id))
                .count() as u32,
            Err(e) => {
                warn!("Failed to fetch unread count: {}", e);
                0
            }
        }
    }
}

#[async_trait]
impl<C: MarketApi + 'static> MessageApi for CachedMarketClient<C> {
    async fn send_message(&self, request: &CreateMessageRequest) -> Result<Message> {
        request.validate()?;
        self.inner.send_message(request).await
    }

    async fn get_conversation(&self, post_id: u64, other_user_id: u64) -> Result<Vec<Message>> {
        require_id("post_id", post_id)?;
        require_id("other_user_id", other_user_id)?;
        self.inner.get_conversation(post_id, other_user_id).await
    }

    async fn get_inbox(&self) -> Result<Vec<InboxConversation>> {
        self.inner.get_inbox().await
    }

    /// Best effort: a failure is logged and reported as nothing marked
    async fn mark_conversation_read(&self, post_id: u64, other_user_id: u64) -> Result<u32> {
        require_id("post_id", post_id)?;
        require_id("other_user_id", other_user_id)?;
        match self.inner.mark_conversation_read(post_id, other_user_id).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                warn!("Failed to mark conversation read: {}", e);
                Ok(0)
            }
        }
    }
}
