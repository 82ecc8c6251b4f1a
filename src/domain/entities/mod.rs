//! Core domain entities.
//!
//! Entities are plain data structures with no persistence knowledge. The only
//! behaviour they carry is validation of their own invariants.
//!
//! # Entity Types
//!
//! - [`Article`] - A blog post owned by its author
//! - [`User`] - A registered account with an optional [`UserProfile`]
//! - [`Tag`] - A unique label attached to articles
//! - [`Comment`] - A reader comment on an article
//! - [`AuditEvent`] - A recorded business action

pub mod article;
pub mod audit_event;
pub mod comment;
pub mod tag;
pub mod user;

pub use article::Article;
pub use audit_event::AuditEvent;
pub use comment::Comment;
pub use tag::Tag;
pub use user::{User, UserProfile};

/// Violated entity invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("title is required")]
    TitleRequired,
    #[error("content is required")]
    ContentRequired,
    #[error("author is required")]
    AuthorRequired,
    #[error("username is required")]
    UsernameRequired,
    #[error("invalid email format")]
    InvalidEmail,
}
