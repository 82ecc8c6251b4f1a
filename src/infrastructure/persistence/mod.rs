//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgArticleRepository`] - Articles and their tag associations
//! - [`PgUserRepository`] - User accounts
//! - [`PgTagRepository`] - Tag catalogue
//! - [`PgCommentRepository`] - Article comments
//! - [`PgDatabaseHealth`] - Liveness probe for `/health`

pub mod pg_article_repository;
pub mod pg_comment_repository;
pub mod pg_health;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_health::{DatabaseHealth, PgDatabaseHealth};
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
