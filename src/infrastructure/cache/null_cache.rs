//! No-op cache implementation for testing or disabled caching.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::Article;
use crate::domain::repositories::{ArticleCache, CacheResult};

/// A cache that never stores anything.
///
/// Every lookup is a miss and every write or eviction succeeds, so services
/// always fall through to the database.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Fallback when the Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleCache for NullCache {
    async fn get_article(&self, _id: i64) -> CacheResult<Option<Article>> {
        Ok(None)
    }

    async fn set_article(&self, _article: &Article, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }

    async fn get_articles(&self, _key: &str) -> CacheResult<Option<Vec<Article>>> {
        Ok(None)
    }

    async fn set_articles(
        &self,
        _key: &str,
        _articles: &[Article],
        _ttl: Duration,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn delete_article(&self, _id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
