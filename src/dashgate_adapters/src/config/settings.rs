use config::{Config, ConfigError, Environment, File};
use http::header::InvalidHeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use super::AllowedOrigins;
use super::constants::{BASE_CONFIG_FILE, DEFAULT_CONFIG_DIR, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct DashgateSettings {
    pub server: ServerSettings,
    pub postgres: PostgresSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    /// `None` when no origin is configured, meaning no CORS layer at all.
    pub fn allowed_origins(&self) -> Result<Option<AllowedOrigins>, InvalidHeaderValue> {
        if self.allowed_origins.is_empty() {
            return Ok(None);
        }
        AllowedOrigins::parse(&self.allowed_origins).map(Some)
    }
}

impl DashgateSettings {
    /// Load settings from defaults, `<config dir>/base.json` (optional),
    /// `DASHGATE__*` environment variables and `DATABASE_URL`.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

        Self::from_sources(
            &config_dir,
            Environment::with_prefix(env::ENV_PREFIX),
            std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
        )
    }

    fn from_sources(
        config_dir: &str,
        environment: Environment,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("server.assets_dir", prod::ASSETS_DIR)?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::POSTGRES_MAX_CONNECTIONS),
            )?
            .set_default("cors.allowed_origins", Vec::<String>::new())?;

        // DATABASE_URL is the conventional fallback; explicit settings win.
        if let Some(url) = database_url {
            builder = builder.set_default("postgres.url", url)?;
        }

        builder
            .add_source(File::with_name(&format!("{config_dir}/{BASE_CONFIG_FILE}")).required(false))
            .add_source(
                environment
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
