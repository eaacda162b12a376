//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Removes an alias binding.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias is not bound, 500 on storage failure.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, AppError> {
    let cancel = state.shutdown.child_token();
    state
        .delete_service
        .remove(&alias, &cancel)
        .await
        .map_err(|e| AppError::from_service(e, "failed to delete url"))?;

    Ok(Json(ApiResponse::ok()))
}
