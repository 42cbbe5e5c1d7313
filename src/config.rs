use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::{env, fmt};

pub const DEFAULT_PORT: u16 = 5000;

/// `DATABASE_URL` scheme that selects the in-process store instead of MongoDB.
pub const MEMORY_URL_SCHEME: &str = "memory://";

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("database_url", &"<redacted>")
            .field("database_name", &self.database_name)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "coursehub".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with(MEMORY_URL_SCHEME)
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
