//! HTTP service assembly for the dashgate credential core.

pub mod helpers;
pub mod request_tracing;
mod service;

pub use helpers::{DatabaseSetupError, configure_postgresql, get_postgres_pool, run_migrations};
pub use service::DashgateService;
