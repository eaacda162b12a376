//! Application layer services implementing business logic.
//!
//! Services consume repository traits and classify every failure into exactly
//! one [`ServiceError`] member before it reaches a caller.
//!
//! # Available Services
//!
//! - [`services::save_service::SaveService`] - Alias assignment with collision retry
//! - [`services::redirect_service::RedirectService`] - Alias resolution
//! - [`services::delete_service::DeleteService`] - Alias removal

pub mod error;
pub mod services;

pub use error::ServiceError;
