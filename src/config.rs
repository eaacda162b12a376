//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="0.0.0.0:8082"
//! ```
//!
//! ## Optional Variables
//!
//! - `STORAGE_PATH` - SQLite database file, or `:memory:` (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text`, `pretty`, `json` or `off` (default: `text`)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_MAX_ATTEMPTS` - Generate-and-insert cycles before giving up (default: 4)
//! - `REQUEST_TIMEOUT_SECS` - Upper bound for a single store call (default: 4)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_BUSY_TIMEOUT` - Pool settings

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::logging::LogFormat;

/// Path that selects an in-memory SQLite database.
pub const IN_MEMORY_STORAGE: &str = ":memory:";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Number of characters in an auto-generated alias.
    pub alias_length: usize,
    /// Generate-and-insert cycles attempted before a save reports exhaustion.
    pub alias_max_attempts: u32,
    /// Upper bound in seconds for one store call; exceeding it cancels the operation.
    pub request_timeout_secs: u64,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// How long SQLite waits on a locked database in seconds (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: "./storage/storage.db".to_string(),
            listen_addr: "0.0.0.0:8082".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            alias_length: 6,
            alias_max_attempts: 4,
            request_timeout_secs: 4,
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_busy_timeout: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let storage_path = env::var("STORAGE_PATH").unwrap_or(defaults.storage_path);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            storage_path,
            listen_addr,
            log_level,
            log_format,
            alias_length: parse_var("ALIAS_LENGTH", defaults.alias_length),
            alias_max_attempts: parse_var("ALIAS_MAX_ATTEMPTS", defaults.alias_max_attempts),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout),
            db_busy_timeout: parse_var("DB_BUSY_TIMEOUT", defaults.db_busy_timeout),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not one of `text`, `pretty`, `json`, `off`
    /// - `listen_addr` is not in `host:port` form
    /// - `storage_path` is empty
    /// - alias or pool settings are out of range
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = LogFormat::from_str(&self.log_format) {
            anyhow::bail!("LOG_FORMAT {e}");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.alias_length == 0 || self.alias_length > 64 {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and 64, got {}",
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 32 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 32, got {}",
                self.alias_max_attempts
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether the store lives only in process memory.
    pub fn is_in_memory(&self) -> bool {
        self.storage_path == IN_MEMORY_STORAGE
    }

    /// Upper bound for a single store call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Aliases: length {}, {} attempts",
            self.alias_length,
            self.alias_max_attempts
        );
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "off".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8082".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8082".to_string();

        config.alias_length = 0;
        assert!(config.validate().is_err());
        config.alias_length = 6;

        config.alias_max_attempts = 0;
        assert!(config.validate().is_err());
        config.alias_max_attempts = 4;

        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.request_timeout_secs = 4;

        config.storage_path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_in_memory_detection() {
        let mut config = Config::default();
        assert!(!config.is_in_memory());

        config.storage_path = IN_MEMORY_STORAGE.to_string();
        assert!(config.is_in_memory());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORAGE_PATH", ":memory:");
            env::set_var("ALIAS_LENGTH", "8");
            env::set_var("ALIAS_MAX_ATTEMPTS", "not-a-number");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.storage_path, ":memory:");
        assert_eq!(config.alias_length, 8);
        // Unparsable values fall back to defaults
        assert_eq!(config.alias_max_attempts, 4);

        // Cleanup
        unsafe {
            env::remove_var("STORAGE_PATH");
            env::remove_var("ALIAS_LENGTH");
            env::remove_var("ALIAS_MAX_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
