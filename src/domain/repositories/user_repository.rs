//! Repository trait for user accounts.

use crate::domain::entities::User;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Repository interface for registered users.
///
/// Lookups report a missing account as [`RepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the username or email is taken.
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<User, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
}
