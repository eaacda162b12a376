//! # Alias Shortener
//!
//! A URL shortening service built with Axum and SQLite that binds target
//! URLs to short aliases and redirects visitors from alias to target.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the alias store trait
//! - **Application Layer** ([`application`]) - Save, redirect and delete orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed alias store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - User-chosen or randomly generated aliases
//! - Alias uniqueness enforced by the store, safe under concurrent saves
//! - Bounded retry on generated alias collisions
//! - Request cancellation on timeout or shutdown
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8082/url -d '{"url":"https://google.com"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::ServiceError;
    pub use crate::application::services::{DeleteService, RedirectService, SaveService};
    pub use crate::domain::entities::{SavedAlias, UrlRecord};
    pub use crate::domain::repositories::{AliasRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
