//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence and cache ports consumed by the application
//! services. Concrete adapters live in `crate::infrastructure`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Every lookup reports a missing record as [`RepositoryError::NotFound`],
//!   distinct from storage failures
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Ports
//!
//! - [`ArticleRepository`] - Article CRUD with tags
//! - [`UserRepository`] - User accounts
//! - [`TagRepository`] - Tag catalogue
//! - [`CommentRepository`] - Article comments
//! - [`ArticleCache`] - Cache-aside storage for articles

pub mod article_cache_repository;
pub mod article_repository;
pub mod comment_repository;
pub mod error;
pub mod tag_repository;
pub mod user_repository;

pub use article_cache_repository::{ArticleCache, CacheError, CacheResult};
pub use article_repository::ArticleRepository;
pub use comment_repository::CommentRepository;
pub use error::RepositoryError;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_cache_repository::MockArticleCache;
#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
