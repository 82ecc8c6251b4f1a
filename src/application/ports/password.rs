//! Password hashing port.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of the hashing backend itself, not a password mismatch.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(pub String);

/// Deliberately slow, salted one-way hashing of user passwords.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::Argon2PasswordHasher`] - Argon2id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing string.
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Checks a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch and `Err` only when the hash cannot be
    /// processed.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
