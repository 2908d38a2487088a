//! Report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, require_text, timestamp};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

/// A filed report against a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub reporter_id: u64,

    #[serde(default)]
    pub reported_user_id: Option<u64>,

    pub reason: String,

    #[serde(default)]
    pub description: Option<String>,

    pub status: ReportStatus,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// New report
#[derive(Debug, Clone, Serialize)]
pub struct CreateReportRequest {
    pub reported_user_id: u64,
    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateReportRequest {
    pub fn validate(&self) -> Result<()> {
        require_id("reported_user_id", self.reported_user_id)?;
        require_text("reason", &self.reason)
    }
}
