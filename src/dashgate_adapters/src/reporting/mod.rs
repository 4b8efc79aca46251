pub mod postgres_reporting_store;
mod queries;

pub use postgres_reporting_store::PostgresReportingStore;
