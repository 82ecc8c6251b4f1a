//! Domain layer containing business entities and persistence ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and their invariants
//! - [`repositories`] - Persistence and cache trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules that span entities and ports live in
//!   [`crate::application::services`]

pub mod entities;
pub mod repositories;
