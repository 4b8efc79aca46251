use dashgate_core::{Report, ReportShape, ReportingStore, ReportingStoreError};
use serde_json::Value;
use sqlx::{PgPool, types::Json};

use super::queries;

/// Runs the dashboard aggregates over the `deposit_data`, `advance_data` and
/// `customer_data` tables.
///
/// Each query is wrapped in `json_agg`, so PostgreSQL returns the result set
/// as one JSON array whatever columns the report selects.
#[derive(Clone)]
pub struct PostgresReportingStore {
    pool: PgPool,
}

impl PostgresReportingStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresReportingStore { pool }
    }
}

#[async_trait::async_trait]
impl ReportingStore for PostgresReportingStore {
    #[tracing::instrument(name = "Fetching report from PostgreSQL", skip(self))]
    async fn fetch(&self, report: Report) -> Result<Value, ReportingStoreError> {
        let query = format!(
            "SELECT COALESCE(json_agg(report), '[]'::json) FROM ({}) AS report",
            queries::sql(report)
        );

        let Json(rows) = sqlx::query_scalar::<_, Json<Value>>(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ReportingStoreError(e.to_string()))?;

        Ok(shape_rows(report.shape(), rows))
    }
}

fn shape_rows(shape: ReportShape, rows: Value) -> Value {
    match (shape, rows) {
        (ReportShape::SingleRow, Value::Array(rows)) => rows
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Object(Default::default())),
        (_, rows) => rows,
    }
}
