//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and the target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is not bound, and 500 if the stored
/// target cannot be expressed as a `Location` header.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cancel = state.shutdown.child_token();
    let target = state
        .redirect_service
        .resolve(&alias, &cancel)
        .await
        .map_err(|e| AppError::from_service(e, "failed to resolve url"))?;

    let location = location_header(&target).ok_or_else(|| {
        tracing::error!(alias = %alias, target = ?target, "stored url is not a valid Location header");
        AppError::internal("failed to resolve url")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Header value for `target`, falling back to its ASCII serialization
/// (punycode host, percent-encoded path) when the stored text is not
/// header-safe.
fn location_header(target: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(target).ok().or_else(|| {
        let url = Url::parse(target).ok()?;
        HeaderValue::from_str(url.as_str()).ok()
    })
}
