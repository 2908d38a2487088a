//! Transaction models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{invalid, require_id, timestamp, Post, UserProfile};
use crate::error::Result;

/// A sale awaiting (or having received) confirmation from both parties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub post_id: u64,
    pub seller_id: u64,
    pub buyer_id: u64,
    pub seller_confirmed: bool,
    pub buyer_confirmed: bool,
    pub completed: bool,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default, with = "timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,

    pub seller: UserProfile,
    pub buyer: UserProfile,
    pub post: Post,
}

impl Transaction {
    /// Whether `user_id` still has to confirm
    pub fn awaits_confirmation_from(&self, user_id: u64) -> bool {
        (user_id == self.seller_id && !self.seller_confirmed)
            || (user_id == self.buyer_id && !self.buyer_confirmed)
    }
}

/// Seller marks a listing sold to one of the users who contacted them
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransactionRequest {
    pub post_id: u64,
    pub buyer_id: u64,
}

impl CreateTransactionRequest {
    pub fn validate(&self) -> Result<()> {
        require_id("post_id", self.post_id)?;
        require_id("buyer_id", self.buyer_id)
    }

    /// Reject choosing yourself as the buyer
    pub fn validate_for_seller(&self, seller_id: u64) -> Result<()> {
        self.validate()?;
        if self.buyer_id == seller_id {
            return invalid("you cannot choose yourself as the buyer");
        }
        Ok(())
    }
}
