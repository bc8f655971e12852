//! HTTP middleware for request processing.
//!
//! Provides observability and cross-origin access for the API.

pub mod cors;
pub mod tracing;
