//! Utility functions for alias generation and input checks.
//!
//! - [`alias_generator`] - Random alphanumeric alias candidates
//! - [`url_validator`] - Target URL and alias format checks

pub mod alias_generator;
pub mod url_validator;
