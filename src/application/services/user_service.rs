//! Registration and login.

use std::sync::Arc;

use crate::application::ports::{AuditService, AuthService, PasswordHasher};
use crate::domain::entities::{AuditEvent, User};
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::error::{DetailError, ErrorCode};

/// Service for user accounts.
///
/// Users are identified by username. Lookups during login never reveal whether
/// an account exists: an unknown username and a wrong password produce the same
/// [`ErrorCode::InvalidCredentials`] error.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    auth: Arc<dyn AuthService>,
    audit: Arc<dyn AuditService>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        auth: Arc<dyn AuthService>,
        audit: Arc<dyn AuditService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            auth,
            audit,
        }
    }

    /// Registers a new user.
    ///
    /// `user.password_hash` must hold the plaintext password; it is replaced by a
    /// salted hash before the user is stored.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::InvalidParams`] if username or email is invalid
    /// - [`ErrorCode::UserAlreadyExists`] if the username or email is taken
    /// - [`ErrorCode::InternalServerError`] on lookup, hashing or storage failures
    pub async fn register(&self, mut user: User) -> Result<User, DetailError> {
        user.validate().map_err(DetailError::invalid_params)?;

        match self.repository.find_by_username(&user.username).await {
            Ok(_) => {
                tracing::warn!(username = %user.username, "user already exists");
                return Err(DetailError::of(ErrorCode::UserAlreadyExists));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to look up user");
                return Err(DetailError::internal(e));
            }
        }

        user.password_hash = self.hasher.hash(&user.password_hash).await.map_err(|e| {
            tracing::error!(error = %e, "failed to hash password");
            DetailError::internal(e)
        })?;

        let created = self.repository.create(user).await.map_err(|e| match e {
            // Email taken, or a concurrent registration won the username.
            RepositoryError::Conflict(_) => {
                tracing::warn!(error = %e, "user already exists");
                DetailError::wrap(ErrorCode::UserAlreadyExists, e)
            }
            e => {
                tracing::error!(error = %e, "failed to create user");
                DetailError::internal(e)
            }
        })?;

        tracing::info!(user_id = created.id, "user registered successfully");
        self.audit.record_event(
            AuditEvent::new(created.id, "user.register", "user", created.id)
                .with_detail("username", created.username.clone()),
        );

        Ok(created)
    }

    /// Verifies credentials and issues a signed token.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::InvalidCredentials`] for an unknown username or wrong password
    /// - [`ErrorCode::InternalServerError`] on lookup failures, an unreadable
    ///   stored hash, or token signing failures
    pub async fn login(&self, username: &str, password: &str) -> Result<String, DetailError> {
        let user = match self.repository.find_by_username(username).await {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                tracing::warn!(username, "login for unknown user");
                return Err(DetailError::wrap(ErrorCode::InvalidCredentials, e));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to look up user");
                return Err(DetailError::internal(e));
            }
        };

        let matches = self
            .hasher
            .verify(password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = user.id, "failed to verify password");
                DetailError::internal(e)
            })?;

        if !matches {
            tracing::warn!(user_id = user.id, "invalid password");
            return Err(DetailError::of(ErrorCode::InvalidCredentials));
        }

        let token = self.auth.generate_token(user.id).map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "failed to generate token");
            DetailError::internal(e)
        })?;

        tracing::info!(user_id = user.id, "user logged in");
        self.audit
            .record_event(AuditEvent::new(user.id, "user.login", "user", user.id));

        Ok(token)
    }
}
