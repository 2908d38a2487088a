//! Report API trait

use async_trait::async_trait;

use crate::client::models::{CreateReportRequest, Report};
use crate::error::Result;

#[async_trait]
pub trait ReportApi: Send + Sync {
    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report>;
}
