//! API-facing errors.
//!
//! Every failure crossing the HTTP boundary is rendered as
//! `{"status":"Error","error":"<message>"}` with a status code per kind.
//! Internal details are logged where they occur and never copied into the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dto::ApiResponse;
use crate::application::ServiceError;

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Maps a service outcome to its API form.
    ///
    /// `failure` is the generic message shown for storage failures, e.g.
    /// `"failed to save url"`.
    pub fn from_service(err: ServiceError, failure: &str) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::Validation(_) => Self::bad_request(message),
            ServiceError::AliasConflict { .. } => Self::conflict(message),
            ServiceError::AliasExhausted { .. } | ServiceError::Cancelled => {
                Self::unavailable(message)
            }
            ServiceError::NotFound => Self::not_found(message),
            ServiceError::Storage(_) => Self::internal(failure),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => ApiResponse::error(message),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::bad_request(validation_message(&errors))
    }
}

/// Renders field errors as `field <name> ...` sentences joined with `", "`.
///
/// Fields are listed in name order so the message is stable.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => Some((field.to_string(), errs)),
            _ => None,
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .map(|(field, errs)| match errs.first().map(|e| &*e.code) {
            Some("required") => format!("field {field} is a required field"),
            Some("url") => format!("field {field} is not a valid URL"),
            _ => format!("field {field} is not valid"),
        })
        .collect();

    if messages.is_empty() {
        "invalid request".to_string()
    } else {
        messages.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StoreError;
    use validator::ValidationError;

    #[test]
    fn test_service_errors_map_to_status_codes() {
        let cases = [
            (
                ServiceError::Validation("field url is not a valid URL".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::AliasConflict {
                    alias: "a".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::AliasExhausted { attempts: 4 },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                ServiceError::Storage(StoreError::Database(sqlx::Error::PoolTimedOut)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ServiceError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from_service(err, "failed").status_code(), status);
        }
    }

    #[test]
    fn test_storage_detail_is_not_exposed() {
        let err = AppError::from_service(
            ServiceError::Storage(StoreError::Database(sqlx::Error::PoolTimedOut)),
            "failed to save url",
        );

        assert_eq!(err.message(), "failed to save url");
    }

    #[test]
    fn test_validation_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("url", ValidationError::new("url"));
        errors.add("alias", ValidationError::new("alias"));

        assert_eq!(
            validation_message(&errors),
            "field alias is not valid, field url is not a valid URL"
        );
    }

    #[test]
    fn test_validation_message_required() {
        let mut errors = ValidationErrors::new();
        errors.add("url", ValidationError::new("required"));

        assert_eq!(
            validation_message(&errors),
            "field url is a required field"
        );
    }
}
