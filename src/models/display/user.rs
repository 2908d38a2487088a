//! User display models

use serde::Serialize;
use tabled::Tabled;

use super::common::format_local;
use crate::client::models::UserProfile;

/// User row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: u64,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "TRADES")]
    pub success_trades: u32,

    #[tabled(rename = "JOINED")]
    pub joined: String,
}

impl From<&UserProfile> for UserDisplay {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            success_trades: user.success_trades,
            joined: format_local(&user.created_at),
        }
    }
}

impl From<UserProfile> for UserDisplay {
    fn from(user: UserProfile) -> Self {
        UserDisplay::from(&user)
    }
}
