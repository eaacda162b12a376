//! Alias removal service.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::bounded;
use crate::application::ServiceError;
use crate::domain::repositories::{AliasRepository, StoreError};

const OP: &str = "services.delete";

/// Service for removing alias bindings.
pub struct DeleteService<R: AliasRepository> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: AliasRepository> DeleteService<R> {
    /// Creates a new delete service.
    pub fn new(repository: Arc<R>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// Deletes the record bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if nothing was bound to the alias,
    /// [`ServiceError::Storage`] on store failures and
    /// [`ServiceError::Cancelled`] if the call was abandoned.
    pub async fn remove(&self, alias: &str, cancel: &CancellationToken) -> Result<(), ServiceError> {
        let res = bounded(cancel, self.timeout, || self.repository.delete(alias))
            .await
            .inspect_err(|_| warn!(op = OP, alias, "delete cancelled"))?;

        match res {
            Ok(()) => {
                info!(op = OP, alias, "url deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => {
                info!(op = OP, alias, "url not found");
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                error!(op = OP, alias, error = %e, "failed to delete url");
                Err(ServiceError::Storage(e))
            }
        }
    }
}
