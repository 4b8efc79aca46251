pub mod allowed_origins;
pub mod constants;
pub mod settings;

pub use allowed_origins::AllowedOrigins;
pub use settings::{CorsSettings, DashgateSettings, PostgresSettings, ServerSettings};
