pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CONFIG_DIR_ENV_VAR: &str = "DASHGATE_CONFIG_DIR";
    pub const ENV_PREFIX: &str = "DASHGATE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const BASE_CONFIG_FILE: &str = "base";

/// Argon2id cost. Keeps a hash in the tens of milliseconds on commodity
/// hardware; changing it only affects newly written hashes.
pub mod hashing {
    pub const ARGON2_MEMORY_COST_KIB: u32 = 15000;
    pub const ARGON2_TIME_COST: u32 = 2;
    pub const ARGON2_PARALLELISM: u32 = 1;

    /// Verified against when an account is unknown. Zero output bytes, which
    /// no password hashes to in practice.
    pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$c2FsdHNhbHRzYWx0c2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ASSETS_DIR: &str = "public";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
