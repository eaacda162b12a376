//! Repository trait for alias to URL storage.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;

/// Errors reported by an alias store.
///
/// `AlreadyExists` and `NotFound` are expected outcomes of the store contract;
/// everything else the driver reports is carried in `Database`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("alias already exists")]
    AlreadyExists,

    #[error("alias not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent mapping from a unique alias to its target URL.
///
/// Uniqueness is enforced by the storage engine itself, so concurrent inserts
/// for one alias resolve to exactly one winner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new record iff no record with `alias` exists.
    ///
    /// Returns the surrogate id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the alias is already bound.
    /// Returns [`StoreError::Database`] on any other failure.
    async fn insert(&self, alias: &str, target_url: &str) -> StoreResult<i64>;

    /// Looks up the record bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this alias.
    async fn lookup(&self, alias: &str) -> StoreResult<UrlRecord>;

    /// Removes the record bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing was deleted.
    async fn delete(&self, alias: &str) -> StoreResult<()>;

    /// Counts stored records.
    async fn count(&self) -> StoreResult<u64>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
