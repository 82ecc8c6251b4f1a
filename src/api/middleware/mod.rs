//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, authorization, rate limiting, and observability
//! middleware.

pub mod admin;
pub mod auth;
pub mod rate_limit;
pub mod tracing;
