//! Alias resolution service.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use super::bounded;
use crate::application::ServiceError;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AliasRepository, StoreError};

const OP: &str = "services.redirect";

/// Service for resolving aliases to their target URLs.
///
/// No alias format check is applied: a malformed alias is simply not found.
pub struct RedirectService<R: AliasRepository> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: AliasRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// Returns the target URL bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the alias is unknown,
    /// [`ServiceError::Storage`] on store failures and
    /// [`ServiceError::Cancelled`] if the lookup was abandoned.
    pub async fn resolve(
        &self,
        alias: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ServiceError> {
        self.find(alias, cancel)
            .await
            .map(|record| record.target_url)
    }

    /// Returns the full record bound to `alias`.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn find(
        &self,
        alias: &str,
        cancel: &CancellationToken,
    ) -> Result<UrlRecord, ServiceError> {
        let res = bounded(cancel, self.timeout, || self.repository.lookup(alias))
            .await
            .inspect_err(|_| warn!(op = OP, alias, "lookup cancelled"))?;

        match res {
            Ok(record) => {
                debug!(op = OP, alias, url = %record.target_url, "got url");
                Ok(record)
            }
            Err(StoreError::NotFound) => {
                debug!(op = OP, alias, "url not found");
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                error!(op = OP, alias, error = %e, "failed to get url");
                Err(ServiceError::Storage(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasRepository;

    fn service(repo: MockAliasRepository) -> RedirectService<MockAliasRepository> {
        RedirectService::new(Arc::new(repo), Duration::from_secs(4))
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo
            .expect_lookup()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|alias| {
                Ok(UrlRecord::new(
                    1,
                    alias.to_string(),
                    "https://www.google.com".to_string(),
                ))
            });

        let url = service(mock_repo)
            .resolve("test_alias", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(url, "https://www.google.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let err = service(mock_repo)
            .resolve("missing", &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound));
        assert_eq!(err.to_string(), "url not found");
    }

    #[tokio::test]
    async fn test_resolve_storage_error() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(mock_repo)
            .resolve("any", &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[tokio::test]
    async fn test_find_returns_record() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo.expect_lookup().times(1).returning(|alias| {
            Ok(UrlRecord::new(
                42,
                alias.to_string(),
                "https://example.com".to_string(),
            ))
        });

        let record = service(mock_repo)
            .find("abc", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.alias, "abc");
    }
}
