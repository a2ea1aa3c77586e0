//! Store configuration loaded from environment variables.
//!
//! ```bash
//! export DATABASE_PATH="/var/lib/golink/links.db"
//! export DB_MAX_CONNECTIONS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_PATH` - SQLite database file (default: `golink.db`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_ACQUIRE_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)
//! - `DB_BUSY_TIMEOUT` - Seconds a writer waits for the database lock (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_ACQUIRE_TIMEOUT`, default: 30).
    pub db_acquire_timeout: u64,
    /// How long a statement waits on a locked database in seconds
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl StoreConfig {
    /// Default settings for a database file at `database_path`.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 10,
            db_acquire_timeout: 30,
            db_busy_timeout: 5,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "golink.db".to_string());
        let mut config = Self::new(database_path);

        if let Ok(level) = env::var("RUST_LOG") {
            config.log_level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            config.log_format = format;
        }

        if let Some(value) = parse_var("DB_MAX_CONNECTIONS")? {
            config.db_max_connections = value;
        }
        if let Some(value) = parse_var("DB_ACQUIRE_TIMEOUT")? {
            config.db_acquire_timeout = value;
        }
        if let Some(value) = parse_var("DB_BUSY_TIMEOUT")? {
            config.db_busy_timeout = value;
        }

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_path` is empty
    /// - `log_format` is not `text` or `json`
    /// - a pool size or timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
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
        if self.db_acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_path.display());
        tracing::info!("  Max connections: {}", self.db_max_connections);
        tracing::info!("  Busy timeout: {}s", self.db_busy_timeout);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the admin binary).
pub fn load_from_env() -> Result<StoreConfig> {
    let config = StoreConfig::from_env()?;
    config.validate()?;
    Ok(config)
}
