//! Transaction and report display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_local, truncate_string, yes_no};
use crate::client::models::{Report, Transaction};

/// Transaction row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransactionDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "LISTING")]
    pub listing: String,

    #[tabled(rename = "SELLER")]
    pub seller: String,

    #[tabled(rename = "BUYER")]
    pub buyer: String,

    #[tabled(rename = "SELLER OK")]
    pub seller_confirmed: String,

    #[tabled(rename = "BUYER OK")]
    pub buyer_confirmed: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&Transaction> for TransactionDisplay {
    fn from(tx: &Transaction) -> Self {
        let state = if tx.completed {
            "completed"
        } else {
            "pending"
        };

        Self {
            id: tx.id,
            listing: format!("#{} {}", tx.post_id, truncate_string(&tx.post.title, 30)),
            seller: tx.seller.username.clone(),
            buyer: tx.buyer.username.clone(),
            seller_confirmed: yes_no(tx.seller_confirmed).to_string(),
            buyer_confirmed: yes_no(tx.buyer_confirmed).to_string(),
            state: state.to_string(),
            created: format_local(&tx.created_at),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "REPORTED USER")]
    pub reported_user: String,

    #[tabled(rename = "REASON")]
    pub reason: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Report> for ReportDisplay {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            reported_user: report
                .reported_user_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "--".to_string()),
            reason: report.reason,
            status: format!("{:?}", report.status).to_lowercase(),
        }
    }
}
