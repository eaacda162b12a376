//! SQLite implementation of the alias repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AliasRepository, StoreError, StoreResult};

/// SQLite repository for alias storage.
///
/// Uniqueness of `alias` comes from the table's `UNIQUE` constraint; a
/// violation on insert is reported as [`StoreError::AlreadyExists`].
pub struct SqliteAliasRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    async fn insert(&self, alias: &str, target_url: &str) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
            .bind(alias)
            .bind(target_url)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::AlreadyExists),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn lookup(&self, alias: &str) -> StoreResult<UrlRecord> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM url WHERE alias = ?")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await?;

        row.map(|(id, alias, url)| UrlRecord::new(id, alias, url))
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, alias: &str) -> StoreResult<()> {
        let done = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
