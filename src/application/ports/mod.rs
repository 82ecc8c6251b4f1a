//! Capability contracts consumed by the application services.
//!
//! Persistence ports live in [`crate::domain::repositories`]; the ports here
//! cover authentication, password hashing and auditing.

pub mod audit;
pub mod auth;
pub mod password;

pub use audit::AuditService;
pub use auth::{AuthError, AuthService, AuthenticatedUser, RequestContext};
pub use password::{HashError, PasswordHasher};

#[cfg(test)]
pub use audit::MockAuditService;
#[cfg(test)]
pub use auth::MockAuthService;
#[cfg(test)]
pub use password::MockPasswordHasher;
