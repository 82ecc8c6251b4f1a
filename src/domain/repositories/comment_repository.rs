//! Repository trait for article comments.

use crate::domain::entities::Comment;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Repository interface for comments.
///
/// No service drives comments yet; the contract exists so the schema and the
/// domain model stay in step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists the comments on an article, oldest first.
    async fn find_by_article_id(&self, article_id: i64) -> Result<Vec<Comment>, RepositoryError>;

    /// Stores a comment and returns it with its assigned id and timestamp.
    async fn save(&self, comment: Comment) -> Result<Comment, RepositoryError>;
}
