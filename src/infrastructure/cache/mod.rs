//! Caching layer for article reads.
//!
//! Two implementations of [`crate::domain::repositories::ArticleCache`]:
//! - [`RedisArticleCache`] - Production Redis-backed cache
//! - [`NullCache`] - Always-miss implementation for disabled caching

mod null_cache;
mod redis_cache;

pub use null_cache::NullCache;
pub use redis_cache::{RedisArticleCache, article_key};
