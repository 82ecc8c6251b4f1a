//! User entity and profile.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::EntityError;

/// Lower-case `local@domain.tld` pattern accepted for user emails.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").unwrap());

/// Optional public profile data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
}

/// A registered user.
///
/// Before registration `password_hash` holds the plaintext password; the user
/// service replaces it with a salted hash before the user is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

impl User {
    /// Creates an unsaved user from registration input.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            password_hash: password.into(),
            profile: UserProfile::default(),
        }
    }

    /// Checks that a username is present and the email is well-formed.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.username.is_empty() {
            return Err(EntityError::UsernameRequired);
        }
        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(EntityError::InvalidEmail);
        }
        Ok(())
    }
}
