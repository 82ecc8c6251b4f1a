//! Repository trait for tags.

use crate::domain::entities::Tag;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Repository interface for the tag catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Lists every tag ordered by name.
    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Tag, RepositoryError>;

    /// Inserts the tag, or returns the existing one with the same name.
    async fn save(&self, tag: Tag) -> Result<Tag, RepositoryError>;
}
