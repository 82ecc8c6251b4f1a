//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain and application
//! layers, providing concrete adapters for persistence, caching, tokens and
//! password hashing.
//!
//! # Modules
//!
//! - [`auth`] - JWT issuance and validation
//! - [`cache`] - Article cache (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - Argon2 password hashing

pub mod auth;
pub mod cache;
pub mod persistence;
pub mod security;
