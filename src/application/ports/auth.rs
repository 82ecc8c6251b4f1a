//! Authentication port and the request identity it reads.

use thiserror::Error;

/// Identity established by a successful bearer-token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Per-request data threaded explicitly into every service call.
///
/// Built once at the HTTP boundary. An anonymous context carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    identity: Option<AuthenticatedUser>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: i64) -> Self {
        Self {
            identity: Some(AuthenticatedUser { user_id }),
        }
    }

    pub fn with_identity(identity: Option<AuthenticatedUser>) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> Option<AuthenticatedUser> {
        self.identity
    }
}

/// Failures of token handling and identity resolution.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no authenticated user in request context")]
    MissingIdentity,

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Token issuance and validation.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::JwtAuthService`] - HS256 JSON Web Tokens
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    /// Issues a signed token for the user.
    fn generate_token(&self, user_id: i64) -> Result<String, AuthError>;

    /// Returns the user id a token was issued for.
    ///
    /// # Errors
    ///
    /// Fails when the signature is invalid, the token expired, or it is malformed.
    fn validate_token(&self, token: &str) -> Result<i64, AuthError>;

    /// Returns the acting user's id.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingIdentity`] when the request was not authenticated.
    fn user_id_from_context(&self, ctx: &RequestContext) -> Result<i64, AuthError>;
}
