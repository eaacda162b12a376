//! Handler for URL saving.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::save::SaveRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Binds a URL to a user-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com", "alias": "test_alias" }
/// ```
///
/// `alias` may be omitted or empty, in which case one is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "test_alias" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or a field is invalid
/// - 409 if the chosen alias is taken
/// - 503 if no free alias was found or the request was cancelled
/// - 500 on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    tracing::debug!(url = %request.url, alias = %request.alias, "request body decoded");

    request.validate()?;

    let cancel = state.shutdown.child_token();
    let saved = state
        .save_service
        .save(&request.url, Some(request.alias.as_str()), &cancel)
        .await
        .map_err(|e| AppError::from_service(e, "failed to save url"))?;

    Ok(Json(ApiResponse::ok_with_alias(saved.alias)))
}
