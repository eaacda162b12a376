//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias to target URL mapping
//! - [`SavedAlias`] - The outcome of a successful save

pub mod url_record;

pub use url_record::{SavedAlias, UrlRecord};
