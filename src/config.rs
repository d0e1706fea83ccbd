use crate::error::{config::ConfigError, AppError};
use crate::locale::DEFAULT_LOCALE;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub storage_root: String,
    pub public_url: String,

    pub admin_token: String,
    pub admin_email: String,

    pub default_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            storage_root: std::env::var("STORAGE_ROOT")
                .map_err(|_| ConfigError::MissingEnvVar("STORAGE_ROOT".to_string()))?,
            public_url: std::env::var("PUBLIC_URL")
                .map_err(|_| ConfigError::MissingEnvVar("PUBLIC_URL".to_string()))?,
            admin_token: std::env::var("ADMIN_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_TOKEN".to_string()))?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()))?,
            default_locale: std::env::var("DEFAULT_LOCALE")
                .unwrap_or_else(|_| DEFAULT_LOCALE.to_string()),
        })
    }
}
