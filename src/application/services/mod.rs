//! Orchestrating services for the application layer.

pub mod delete_service;
pub mod redirect_service;
pub mod save_service;

pub use delete_service::DeleteService;
pub use redirect_service::RedirectService;
pub use save_service::{AliasPolicy, SaveService};

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ServiceError;
use crate::domain::repositories::StoreResult;

/// Runs one store call bounded by `cancel` and `timeout`.
///
/// The call is not started at all if `cancel` already fired. The outer `Err`
/// means the call was abandoned; the inner result is the store's own outcome.
pub(crate) async fn bounded<T, C, F>(
    cancel: &CancellationToken,
    timeout: Duration,
    call: C,
) -> Result<StoreResult<T>, ServiceError>
where
    C: FnOnce() -> F,
    F: Future<Output = StoreResult<T>>,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ServiceError::Cancelled),
        res = tokio::time::timeout(timeout, call()) => res.map_err(|_| ServiceError::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let cancel = CancellationToken::new();
        let res = bounded(&cancel, Duration::from_secs(1), || async { Ok(5) }).await;

        assert!(matches!(res, Ok(Ok(5))));
    }

    #[tokio::test]
    async fn test_bounded_stops_on_cancelled_token() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let res = bounded(&cancel, Duration::from_secs(1), || async { Ok(5) }).await;

        assert!(matches!(res, Err(ServiceError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_times_out() {
        let cancel = CancellationToken::new();
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        };

        let res = bounded(&cancel, Duration::from_secs(4), || slow).await;

        assert!(matches!(res, Err(ServiceError::Cancelled)));
    }
}
