//! User models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, timestamp};
use crate::error::Result;

/// Public profile of a marketplace user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,

    pub email: String,

    pub username: String,

    /// Server-relative path such as `/static/avatars/<uuid>.png`
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Completed trades where both sides confirmed
    #[serde(default)]
    pub success_trades: u32,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Profile fields the owner may change
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<()> {
        match &self.username {
            Some(name) => require_text("username", name),
            None => super::invalid("nothing to update"),
        }
    }
}
