//! Axum routes for the dashboard aggregates.

use axum::{Router, extract::State, response::Response, routing::get};
use dashgate_adapters::handlers;
use dashgate_core::{Report, ReportingStore};

use crate::adapters::response_builder;

/// One `GET` route per [`Report`], all sharing the given store as state.
pub fn reports_router<R>(reporting_store: R) -> Router
where
    R: ReportingStore + Clone + 'static,
{
    Report::ALL
        .into_iter()
        .fold(Router::<R>::new(), |router, report| {
            router.route(
                report.path(),
                get(move |State(store): State<R>| report_route(store, report)),
            )
        })
        .with_state(reporting_store)
}

pub async fn report_route<R: ReportingStore>(reporting_store: R, report: Report) -> Response {
    handlers::handle_report(reporting_store, report, response_builder()).await
}
