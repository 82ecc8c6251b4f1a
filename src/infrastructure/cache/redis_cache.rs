//! Redis-backed article cache.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::entities::Article;
use crate::domain::repositories::{ArticleCache, CacheError, CacheResult};

/// Article cache stored as JSON strings in Redis.
///
/// Single articles live under `article:{id}`; collections live under the key
/// the caller supplies. Unlike a fail-open cache, every Redis error is returned
/// to the caller, which decides whether to tolerate it.
pub struct RedisArticleCache {
    client: ConnectionManager,
}

impl RedisArticleCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        let mut conn = self.client.clone();

        let raw: Option<String> = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {key}: {e}")))?;

        match raw {
            Some(json) => {
                debug!(key, "cache hit");
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheResult<()> {
        let json = serde_json::to_string(value)?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(key, json, ttl.as_secs().max(1))
            .await
            .map_err(|e| CacheError::Operation(format!("SET {key}: {e}")))?;

        debug!(key, ttl_secs = ttl.as_secs(), "cache set");
        Ok(())
    }
}

/// Redis key of a single cached article.
pub fn article_key(id: i64) -> String {
    format!("article:{id}")
}

#[async_trait]
impl ArticleCache for RedisArticleCache {
    async fn get_article(&self, id: i64) -> CacheResult<Option<Article>> {
        self.get_json(&article_key(id)).await
    }

    async fn set_article(&self, article: &Article, ttl: Duration) -> CacheResult<()> {
        self.set_json(&article_key(article.id), article, ttl).await
    }

    async fn get_articles(&self, key: &str) -> CacheResult<Option<Vec<Article>>> {
        self.get_json(key).await
    }

    async fn set_articles(
        &self,
        key: &str,
        articles: &[Article],
        ttl: Duration,
    ) -> CacheResult<()> {
        self.set_json(key, articles, ttl).await
    }

    async fn delete_article(&self, id: i64) -> CacheResult<()> {
        let key = article_key(id);
        let mut conn = self.client.clone();

        let deleted: i64 = conn
            .del::<_, i64>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("DEL {key}: {e}")))?;

        if deleted > 0 {
            debug!(key, "cache evict");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_key() {
        assert_eq!(article_key(42), "article:42");
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisArticleCache::connect("not-a-redis-url").await;
        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
