use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::Report;

#[derive(Debug, Error)]
#[error("Reporting store failure: {0}")]
pub struct ReportingStoreError(pub String);

/// Source of the dashboard aggregates.
///
/// The result is already in response form: an array of row objects for
/// [`ReportShape::Rows`](crate::ReportShape::Rows) reports, a single object
/// otherwise.
#[async_trait]
pub trait ReportingStore: Send + Sync {
    async fn fetch(&self, report: Report) -> Result<serde_json::Value, ReportingStoreError>;
}
