//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Bind a URL to a chosen or generated alias
/// - `DELETE /url/{alias}`  - Remove an alias binding
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
