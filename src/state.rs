//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;

use crate::application::services::{AliasPolicy, DeleteService, RedirectService, SaveService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteAliasRepository;

#[derive(Clone)]
pub struct AppState {
    pub save_service: Arc<SaveService<SqliteAliasRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteAliasRepository>>,
    pub delete_service: Arc<DeleteService<SqliteAliasRepository>>,
    pub repository: Arc<SqliteAliasRepository>,
    /// Cancelled on shutdown; each request works under a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Wires the services over one shared repository.
    pub fn new(pool: Arc<SqlitePool>, config: &Config, shutdown: CancellationToken) -> Self {
        let repository = Arc::new(SqliteAliasRepository::new(pool));
        let timeout = config.request_timeout();

        let save_service = Arc::new(SaveService::new(
            repository.clone(),
            AliasPolicy::from_config(config),
            timeout,
        ));
        let redirect_service = Arc::new(RedirectService::new(repository.clone(), timeout));
        let delete_service = Arc::new(DeleteService::new(repository.clone(), timeout));

        Self {
            save_service,
            redirect_service,
            delete_service,
            repository,
            shutdown,
        }
    }
}
