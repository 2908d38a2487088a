//! Report facade

use async_trait::async_trait;

use super::CachedMarketClient;
use crate::client::MarketApi;
use crate::client::api::ReportApi;
use crate::client::models::{CreateReportRequest, Report};
use crate::error::Result;

#[async_trait]
impl<C: MarketApi + 'static> ReportApi for CachedMarketClient<C> {
    async fn create_report(&self, request: &CreateReportRequest) -> Result<Report> {
        request.validate()?;
        self.inner.create_report(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMarketClient;
    use crate::client::fixtures;

    #[tokio::test]
    async fn test_report_filed() {
        let mock = MockMarketClient::new()
            .with_user(fixtures::user(1, "me"))
            .await;
        let client = CachedMarketClient::new(mock, true);

        let report = client
            .create_report(&CreateReportRequest {
                reported_user_id: 9,
                reason: "No-show".to_string(),
                description: Some("Did not come to the meetup".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(report.reporter_id, 1);
        assert_eq!(report.reported_user_id, Some(9));
        assert_eq!(report.description.as_deref(), Some("Did not come to the meetup"));
    }

    #[tokio::test]
    async fn test_report_without_reason_not_sent() {
        let client = CachedMarketClient::new(MockMarketClient::new(), true);

        let result = client
            .create_report(&CreateReportRequest {
                reported_user_id: 9,
                reason: " ".to_string(),
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(client.inner().call_counts().await.create_report, 0);
    }
}
