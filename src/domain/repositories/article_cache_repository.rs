//! Cache port for articles.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::Article;

/// Errors raised by a cache backend.
///
/// A cache miss is never an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),

    #[error("cache operation error: {0}")]
    Operation(String),

    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of single articles (keyed by id) and article collections (keyed by
/// caller-chosen strings).
///
/// Implementations must tolerate concurrent use from many requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisArticleCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - Always-miss cache for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// Returns `Ok(None)` on a miss and `Err` when the backend is unavailable.
    async fn get_article(&self, id: i64) -> CacheResult<Option<Article>>;

    async fn set_article(&self, article: &Article, ttl: Duration) -> CacheResult<()>;

    async fn get_articles(&self, key: &str) -> CacheResult<Option<Vec<Article>>>;

    async fn set_articles(&self, key: &str, articles: &[Article], ttl: Duration)
    -> CacheResult<()>;

    /// Evicts the single-article entry for `id`.
    async fn delete_article(&self, id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
