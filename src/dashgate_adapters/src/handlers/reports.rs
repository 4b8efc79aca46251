//! Framework-agnostic handler for the read-only dashboard aggregates.

use dashgate_core::{AuthResponseBuilder, AuthResponseHelpers, Report, ReportingStore};

use super::messages;

/// Answers 200 with the report's JSON, or 500 `Internal Server Error` when the
/// store fails. The failure detail is only logged.
#[tracing::instrument(name = "Report", skip_all, fields(report = %report))]
pub async fn handle_report<R, B>(reporting_store: R, report: Report, builder: B) -> B::Response
where
    R: ReportingStore,
    B: AuthResponseBuilder,
{
    match reporting_store.fetch(report).await {
        Ok(body) => builder.status(200).json_body(body).build(),
        Err(e) => {
            tracing::error!(error = %e, "Report query failed");
            builder.internal_error(messages::INTERNAL_SERVER_ERROR)
        }
    }
}
