//! HTTP middleware for request processing and protection.
//!
//! Provides Bearer authentication, rate limiting, and observability middleware.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
