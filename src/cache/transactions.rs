//! Transaction facade

use async_trait::async_trait;

use super::{CacheKeys, CachedMarketClient};
use crate::client::MarketApi;
use crate::client::api::TransactionApi;
use crate::client::models::{CreateTransactionRequest, Transaction, UserProfile, require_id};
use crate::error::Result;

#[async_trait]
impl<C: MarketApi + 'static> TransactionApi for CachedMarketClient<C> {
    /// The server marks the listing sold
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction> {
        request.validate()?;
        let transaction = self.inner.create_transaction(request).await?;
        self.invalidate_post(request.post_id);
        Ok(transaction)
    }

    /// Completion bumps both parties' trade counts, which listings embed
    async fn confirm_transaction(&self, transaction_id: u64) -> Result<Transaction> {
        require_id("transaction_id", transaction_id)?;
        let transaction = self.inner.confirm_transaction(transaction_id).await?;
        self.invalidate_prefix(CacheKeys::POSTS_PREFIX);
        Ok(transaction)
    }

    async fn list_pending_transactions(&self) -> Result<Vec<Transaction>> {
        self.inner.list_pending_transactions().await
    }

    async fn list_contacted_users(&self, post_id: u64) -> Result<Vec<UserProfile>> {
        require_id("post_id", post_id)?;
        self.inner.list_contacted_users(post_id).await
    }
}
