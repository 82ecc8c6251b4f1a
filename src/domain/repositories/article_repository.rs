//! Repository trait for article persistence.

use crate::domain::entities::Article;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Repository interface for articles and their tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stores a new article together with its tags.
    ///
    /// Returns the stored article with the id assigned by persistence.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on storage failures.
    async fn create(&self, article: Article) -> Result<Article, RepositoryError>;

    /// Loads a single article.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no article has this id.
    async fn get_by_id(&self, id: i64) -> Result<Article, RepositoryError>;

    /// Loads every article, newest first.
    async fn get_all(&self) -> Result<Vec<Article>, RepositoryError>;

    /// Overwrites title and content of a stored article.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the article no longer exists.
    async fn update(&self, article: &Article) -> Result<(), RepositoryError>;

    /// Removes an article and its tag links.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
