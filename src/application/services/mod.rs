//! Business logic services for the application layer.

pub mod article_service;
pub mod audit_service;
pub mod tag_service;
pub mod user_service;

pub use article_service::{ALL_ARTICLES_CACHE_KEY, ARTICLE_CACHE_TTL, ArticleService};
pub use audit_service::TracingAuditService;
pub use tag_service::TagService;
pub use user_service::UserService;
