//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`          - Save a URL under an alias
//! - `DELETE /url/{alias}`  - Delete an alias
//! - `GET    /health`       - Health check
//! - `GET    /{alias}`      - Redirect to the target URL
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` is generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(tracing::layer())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
