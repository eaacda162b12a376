//! Error taxonomy shared by the orchestrating services.

use crate::domain::repositories::StoreError;
use crate::utils::url_validator::UrlValidationError;

/// Classified outcome of a failed service call.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Input failed a format check; the store was not touched.
    #[error("{0}")]
    Validation(String),

    /// A user-chosen alias is already bound.
    #[error("alias already exists")]
    AliasConflict { alias: String },

    /// Every generated candidate collided.
    #[error("could not generate unique alias")]
    AliasExhausted { attempts: u32 },

    /// No record is bound to the alias.
    #[error("url not found")]
    NotFound,

    /// The store failed for a reason unrelated to uniqueness.
    #[error("storage failure: {0}")]
    Storage(#[source] StoreError),

    /// The caller's token fired or a store call exceeded its time bound.
    #[error("request cancelled")]
    Cancelled,
}

impl ServiceError {
    /// Field-level message for a rejected target URL.
    pub fn invalid_url(err: &UrlValidationError) -> Self {
        match err {
            UrlValidationError::Empty => Self::Validation("field url is a required field".into()),
            _ => Self::Validation("field url is not a valid URL".into()),
        }
    }

    /// Field-level message for a rejected alias.
    pub fn invalid_alias() -> Self {
        Self::Validation("field alias is not valid".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_messages() {
        assert_eq!(
            ServiceError::invalid_url(&UrlValidationError::Empty).to_string(),
            "field url is a required field"
        );
        assert_eq!(
            ServiceError::invalid_url(&UrlValidationError::UnsupportedProtocol).to_string(),
            "field url is not a valid URL"
        );
    }

    #[test]
    fn test_storage_error_keeps_source() {
        use std::error::Error;

        let err = ServiceError::Storage(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert!(err.source().is_some());
    }
}
