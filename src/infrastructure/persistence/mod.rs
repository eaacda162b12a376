//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx, plus the
//! pool construction shared by the server, the admin CLI and the tests.
//!
//! # Repositories
//!
//! - [`SqliteAliasRepository`] - Alias storage and retrieval

pub mod sqlite_alias_repository;

pub use sqlite_alias_repository::SqliteAliasRepository;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::config::Config;

/// Opens the SQLite pool described by `config` and applies migrations.
///
/// File databases are created on first use, together with their parent
/// directory. An in-memory database only lives as long as its connection, so
/// the pool is pinned to a single connection that is never recycled.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the database cannot
/// be opened, or a migration fails.
pub async fn open_pool(config: &Config) -> Result<SqlitePool> {
    let busy_timeout = Duration::from_secs(config.db_busy_timeout);
    let acquire_timeout = Duration::from_secs(config.db_connect_timeout);

    let pool = if config.is_in_memory() {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.busy_timeout(busy_timeout);

        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?
    } else {
        let path = Path::new(&config.storage_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);

        SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", config.storage_path))?
    };

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}
