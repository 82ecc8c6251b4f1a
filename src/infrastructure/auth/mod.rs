//! Token-based authentication adapters.

mod jwt;

pub use jwt::{Claims, JwtAuthService};
