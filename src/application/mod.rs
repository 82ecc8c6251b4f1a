//! Application layer: use cases and the capability ports they consume.
//!
//! Services orchestrate validation, authorization and repository calls, and
//! return either a domain value or a [`crate::error::DetailError`]. Every
//! collaborator is injected as a trait object, so services never reach for
//! global state.
//!
//! # Available Services
//!
//! - [`services::ArticleService`] - Article CRUD with cache-aside reads
//! - [`services::UserService`] - Registration and login
//! - [`services::TagService`] - Tag catalogue
//! - [`services::TracingAuditService`] - Audit sink over `tracing`

pub mod ports;
pub mod services;
