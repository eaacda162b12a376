//! Alias assignment service.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::bounded;
use crate::application::ServiceError;
use crate::config::Config;
use crate::domain::entities::SavedAlias;
use crate::domain::repositories::{AliasRepository, StoreError};
use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
use crate::utils::url_validator::{is_reserved_alias, is_valid_alias, validate_target_url};

const OP: &str = "services.save";

/// Alias generation limits for [`SaveService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Characters in a generated alias.
    pub length: usize,
    /// Generate-and-insert cycles before giving up.
    pub max_attempts: u32,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: 6,
            max_attempts: 4,
        }
    }
}

impl AliasPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            length: config.alias_length,
            max_attempts: config.alias_max_attempts,
        }
    }
}

/// Service that binds target URLs to aliases.
///
/// A user-chosen alias gets exactly one insert: a collision is a definitive
/// conflict. An auto-generated alias is retried with fresh candidates up to
/// [`AliasPolicy::max_attempts`] times. Uniqueness itself is left to the store.
pub struct SaveService<R: AliasRepository, G: AliasGenerator = RandomAliasGenerator> {
    repository: Arc<R>,
    generator: G,
    policy: AliasPolicy,
    timeout: Duration,
}

impl<R: AliasRepository> SaveService<R, RandomAliasGenerator> {
    /// Creates a save service drawing aliases from the thread-local RNG.
    pub fn new(repository: Arc<R>, policy: AliasPolicy, timeout: Duration) -> Self {
        Self::with_generator(repository, RandomAliasGenerator, policy, timeout)
    }
}

impl<R: AliasRepository, G: AliasGenerator> SaveService<R, G> {
    /// Creates a save service with a custom candidate source.
    pub fn with_generator(
        repository: Arc<R>,
        generator: G,
        policy: AliasPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            repository,
            generator,
            policy,
            timeout,
        }
    }

    /// Binds `target_url` to `alias`, or to a generated alias when `alias` is
    /// `None` or empty.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Validation`] if the URL or alias is malformed; nothing is stored
    /// - [`ServiceError::AliasConflict`] if the chosen alias is taken
    /// - [`ServiceError::AliasExhausted`] if every generated candidate collided
    /// - [`ServiceError::Storage`] on any other store failure (not retried)
    /// - [`ServiceError::Cancelled`] if `cancel` fires or a store call times out;
    ///   no further attempts are made
    pub async fn save(
        &self,
        target_url: &str,
        alias: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<SavedAlias, ServiceError> {
        if let Err(e) = validate_target_url(target_url) {
            info!(op = OP, error = %e, "invalid url");
            return Err(ServiceError::invalid_url(&e));
        }

        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                if !is_valid_alias(alias) {
                    info!(op = OP, alias, "invalid alias");
                    return Err(ServiceError::invalid_alias());
                }
                self.insert_chosen(target_url, alias, cancel).await
            }
            None => self.insert_generated(target_url, cancel).await,
        }
    }

    async fn insert_chosen(
        &self,
        target_url: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> Result<SavedAlias, ServiceError> {
        match self.insert(target_url, alias, cancel).await? {
            Ok(id) => {
                info!(op = OP, id, alias, "url added");
                Ok(SavedAlias {
                    id,
                    alias: alias.to_string(),
                })
            }
            Err(StoreError::AlreadyExists) => {
                info!(op = OP, alias, "alias already in use");
                Err(ServiceError::AliasConflict {
                    alias: alias.to_string(),
                })
            }
            Err(e) => Err(storage_failure(e)),
        }
    }

    /// Tries fresh candidates until one is stored or the attempt budget is spent.
    async fn insert_generated(
        &self,
        target_url: &str,
        cancel: &CancellationToken,
    ) -> Result<SavedAlias, ServiceError> {
        let attempts = self.policy.max_attempts;

        for attempt in 1..=attempts {
            let candidate = self.generator.generate(self.policy.length);

            // A route name would be shadowed; spend the attempt like a collision.
            if is_reserved_alias(&candidate) {
                info!(op = OP, alias = %candidate, attempt, "generated alias is reserved, retrying");
                continue;
            }

            match self.insert(target_url, &candidate, cancel).await? {
                Ok(id) => {
                    info!(op = OP, id, alias = %candidate, attempt, "url added");
                    return Ok(SavedAlias {
                        id,
                        alias: candidate,
                    });
                }
                Err(StoreError::AlreadyExists) => {
                    info!(op = OP, alias = %candidate, attempt, "generated alias collision, retrying");
                }
                Err(e) => return Err(storage_failure(e)),
            }
        }

        error!(op = OP, attempts, "could not generate unique alias");
        Err(ServiceError::AliasExhausted { attempts })
    }

    async fn insert(
        &self,
        target_url: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> Result<Result<i64, StoreError>, ServiceError> {
        bounded(cancel, self.timeout, || self.repository.insert(alias, target_url))
            .await
            .inspect_err(|_| warn!(op = OP, alias, "save cancelled"))
    }
}

fn storage_failure(e: StoreError) -> ServiceError {
    error!(op = OP, error = %e, "failed to save url");
    ServiceError::Storage(e)
}
