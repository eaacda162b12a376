//! HTTP middleware for request processing.
//!
//! Provides request id propagation and observability middleware.

pub mod tracing;
