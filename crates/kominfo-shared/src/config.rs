//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    pub storage: StorageSettings,
    pub youtube: YoutubeSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub public_base_url: String,
    pub utc_offset_hours: i32,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
}

/// First admin account, created on startup when the table is empty.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthSettings {
    pub bootstrap_email: Option<String>,
    pub bootstrap_password: Option<String>,
    pub bootstrap_display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub root_dir: String,
    pub public_path: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct YoutubeSettings {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub channel_id: Option<String>,
    pub max_results: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
    pub file_prefix: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config: Self = Self::builder(&env)?.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(AppError::InvalidConfig("jwt.secret must not be empty".into()));
        }
        if self.jwt.access_token_expiry <= 0 {
            return Err(AppError::InvalidConfig("jwt.access_token_expiry must be positive".into()));
        }
        if self.storage.max_upload_bytes == 0 {
            return Err(AppError::InvalidConfig("storage.max_upload_bytes must be positive".into()));
        }
        Ok(())
    }

    fn builder(env: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "kominfo-server")?
            .set_default("app.public_base_url", "http://127.0.0.1:8080")?
            .set_default("app.utc_offset_hours", crate::constants::DEFAULT_UTC_OFFSET_HOURS as i64)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.access_token_expiry", crate::constants::DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("storage.root_dir", "uploads")?
            .set_default("storage.public_path", "/storage")?
            .set_default("storage.max_upload_bytes", crate::constants::DEFAULT_MAX_UPLOAD_BYTES as i64)?
            .set_default("youtube.api_base_url", "https://www.googleapis.com/youtube/v3")?
            .set_default("youtube.max_results", 6)?
            .set_default("youtube.timeout_seconds", 10)?
            .set_default("log.level", "info")?
            .set_default("log.json", true)?
            .set_default("log.file_prefix", "kominfo-server")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let config: AppConfig = AppConfig::builder("test")
            .unwrap()
            .set_override("database.url", "postgres://localhost/kominfo")
            .unwrap()
            .set_override("jwt.secret", "secret")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.utc_offset_hours, 7);
        assert_eq!(config.storage.public_path, "/storage");
        assert!(config.youtube.api_key.is_none());
        assert!(config.auth.bootstrap_email.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_jwt_secret_is_rejected() {
        let config: AppConfig = AppConfig::builder("test")
            .unwrap()
            .set_override("database.url", "postgres://localhost/kominfo")
            .unwrap()
            .set_override("jwt.secret", "  ")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }
}
