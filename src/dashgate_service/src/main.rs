use color_eyre::eyre::Result;
use dashgate_adapters::{
    config::DashgateSettings, hashing::Argon2PasswordHasher,
    persistence::PostgresCredentialStore, reporting::PostgresReportingStore,
};
use dashgate_service::{DashgateService, configure_postgresql};
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = DashgateSettings::load()?;

    // Setup database connection pool and schema
    let pg_pool = configure_postgresql(&settings.postgres).await?;

    let service = DashgateService::new(
        PostgresCredentialStore::new(pg_pool.clone()),
        Argon2PasswordHasher::new(),
        PostgresReportingStore::new(pg_pool),
        settings.server.assets_dir.clone(),
    );

    let allowed_origins = settings.cors.allowed_origins()?;

    let listener = TcpListener::bind(&settings.server.address).await?;
    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
