use secrecy::ExposeSecret;
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use thiserror::Error;

use dashgate_adapters::config::PostgresSettings;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Failed to create Postgres connection pool: {0}")]
    Connection(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] MigrateError),
}

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool from the given settings and runs all pending migrations,
/// which own the `credentials` table and the reporting tables.
pub async fn configure_postgresql(
    settings: &PostgresSettings,
) -> Result<PgPool, DatabaseSetupError> {
    let pg_pool =
        get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    run_migrations(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
