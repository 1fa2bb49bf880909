//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is read first if present.
//!
//! ```bash
//! export BASE_URL="https://short.example"
//! export PORT=9000
//! ```
//!
//! ## Required Variables
//!
//! - `BASE_URL` - Prefix of returned short URLs
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `9000`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `DATABASE_URL` - SQLite location (default: `sqlite://smolink.db`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://smolink.db";

/// Port used when `PORT` is not set or not a number.
pub const DEFAULT_PORT: u16 = 9000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BASE_URL` is not set.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BASE_URL")
            .context("BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = database_url_from_env();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            base_url,
            host,
            port,
            database_url,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is empty or not an absolute URL
    /// - `port` is 0
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL must be an absolute URL, got '{}'", self.base_url))?;

        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Address the server binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads `DATABASE_URL`, falling back to [`DEFAULT_DATABASE_URL`].
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
