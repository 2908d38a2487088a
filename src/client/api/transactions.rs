//! Transaction API trait

use async_trait::async_trait;

use crate::client::models::{CreateTransactionRequest, Transaction, UserProfile};
use crate::error::Result;

/// Sale lifecycle operations
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Seller picks a buyer; the listing becomes sold
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction>;

    /// Record the caller's confirmation
    async fn confirm_transaction(&self, transaction_id: u64) -> Result<Transaction>;

    /// Transactions still waiting on the caller
    async fn list_pending_transactions(&self) -> Result<Vec<Transaction>>;

    /// Users who messaged the seller about a listing
    async fn list_contacted_users(&self, post_id: u64) -> Result<Vec<UserProfile>>;
}
