//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_alias.rs` for usage examples.

pub mod alias_repository;

pub use alias_repository::{AliasRepository, StoreError, StoreResult};

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
