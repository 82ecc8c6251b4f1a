//! Article use cases with cache-aside reads and ownership checks.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use crate::application::ports::{AuditService, AuthService, RequestContext};
use crate::domain::entities::{Article, AuditEvent};
use crate::domain::repositories::{ArticleCache, ArticleRepository, RepositoryError};
use crate::error::{DetailError, ErrorCode};

/// Expiration applied whenever a database read repopulates the cache.
pub const ARTICLE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache key of the full article collection.
pub const ALL_ARTICLES_CACHE_KEY: &str = "articles:all";

/// Service enforcing the article business rules.
///
/// # Cache policy
///
/// Reads fail open: a cache error is logged and treated as a miss, and a failed
/// cache write never fails a read. Writes fail closed: when evicting the cached
/// article after an update or delete fails, the caller gets the error.
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    cache: Arc<dyn ArticleCache>,
    auth: Arc<dyn AuthService>,
    audit: Arc<dyn AuditService>,
}

impl ArticleService {
    /// Creates a new article service.
    pub fn new(
        repository: Arc<dyn ArticleRepository>,
        cache: Arc<dyn ArticleCache>,
        auth: Arc<dyn AuthService>,
        audit: Arc<dyn AuditService>,
    ) -> Self {
        Self {
            repository,
            cache,
            auth,
            audit,
        }
    }

    /// Creates an article authored by the acting user.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::Unauthorized`] if the request carries no identity
    /// - [`ErrorCode::InvalidParams`] if title or content is empty
    /// - [`ErrorCode::InternalServerError`] on storage failures
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        mut article: Article,
    ) -> Result<Article, DetailError> {
        let user_id = self.acting_user(ctx)?;
        article.author_id = user_id;

        if let Err(e) = article.validate() {
            tracing::warn!(error = %e, "article validation failed");
            return Err(DetailError::invalid_params(e));
        }

        let created = self.repository.create(article).await.map_err(|e| {
            tracing::error!(error = %e, "failed to create article");
            DetailError::internal(e)
        })?;

        tracing::info!(article_id = created.id, "article created successfully");
        self.audit.record_event(
            AuditEvent::new(user_id, "article.create", "article", created.id)
                .with_detail("title", created.title.clone())
                .with_detail("tags", json!(created.tag_names())),
        );

        Ok(created)
    }

    /// Returns a single article, serving from cache when possible.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::ArticleNotFound`] if no article has this id
    /// - [`ErrorCode::InternalServerError`] on storage failures
    pub async fn get_article_by_id(&self, id: i64) -> Result<Article, DetailError> {
        match self.cache.get_article(id).await {
            Ok(Some(article)) => {
                tracing::info!(article_id = id, "article cache hit");
                return Ok(article);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, article_id = id, "failed to get article from cache");
            }
        }

        tracing::info!(article_id = id, "article cache miss");
        let article = self.load_article(id).await?;

        if let Err(e) = self.cache.set_article(&article, ARTICLE_CACHE_TTL).await {
            tracing::error!(error = %e, article_id = id, "failed to set article to cache");
        }

        Ok(article)
    }

    /// Returns every article, serving from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::InternalServerError`] on storage failures.
    pub async fn get_all_articles(&self) -> Result<Vec<Article>, DetailError> {
        match self.cache.get_articles(ALL_ARTICLES_CACHE_KEY).await {
            Ok(Some(articles)) => {
                tracing::info!(count = articles.len(), "articles cache hit");
                return Ok(articles);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to get articles from cache");
            }
        }

        tracing::info!("articles cache miss");
        let articles = self.repository.get_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to load articles");
            DetailError::internal(e)
        })?;

        if let Err(e) = self
            .cache
            .set_articles(ALL_ARTICLES_CACHE_KEY, &articles, ARTICLE_CACHE_TTL)
            .await
        {
            tracing::error!(error = %e, "failed to set articles to cache");
        }

        Ok(articles)
    }

    /// Replaces title and content of an article owned by the acting user.
    ///
    /// Author and tags of the stored article are kept. On success the cached
    /// copy of the article is evicted.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::Unauthorized`] if the request carries no identity or the
    ///   acting user is not the author
    /// - [`ErrorCode::ArticleNotFound`] if the article does not exist
    /// - [`ErrorCode::InvalidParams`] if the new title or content is empty
    /// - [`ErrorCode::InternalServerError`] on storage or cache eviction failures
    pub async fn update_article(
        &self,
        ctx: &RequestContext,
        changes: Article,
    ) -> Result<Article, DetailError> {
        let user_id = self.acting_user(ctx)?;

        let mut article = self.load_article(changes.id).await?;
        if article.author_id != user_id {
            tracing::warn!(
                article_id = article.id,
                user_id,
                "user not authorized to update article"
            );
            return Err(DetailError::unauthorized(
                "user not authorized to update this article",
            ));
        }

        article.title = changes.title;
        article.content = changes.content;
        article.validate().map_err(DetailError::invalid_params)?;

        self.repository
            .update(&article)
            .await
            .map_err(|e| not_found_or_internal(e, ErrorCode::ArticleNotFound))?;

        self.evict(article.id).await?;

        tracing::info!(article_id = article.id, "article updated successfully");
        self.audit.record_event(
            AuditEvent::new(user_id, "article.update", "article", article.id)
                .with_detail("title", article.title.clone()),
        );

        Ok(article)
    }

    /// Deletes an article owned by the acting user and evicts its cached copy.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_article`], minus validation.
    pub async fn delete_article(&self, ctx: &RequestContext, id: i64) -> Result<(), DetailError> {
        let user_id = self.acting_user(ctx)?;

        let article = self.load_article(id).await?;
        if article.author_id != user_id {
            tracing::warn!(article_id = id, user_id, "user not authorized to delete article");
            return Err(DetailError::unauthorized(
                "user not authorized to delete this article",
            ));
        }

        self.repository
            .delete(id)
            .await
            .map_err(|e| not_found_or_internal(e, ErrorCode::ArticleNotFound))?;

        self.evict(id).await?;

        tracing::info!(article_id = id, "article deleted successfully");
        self.audit
            .record_event(AuditEvent::new(user_id, "article.delete", "article", id));

        Ok(())
    }

    fn acting_user(&self, ctx: &RequestContext) -> Result<i64, DetailError> {
        self.auth.user_id_from_context(ctx).map_err(|e| {
            tracing::warn!(error = %e, "failed to get user id from request context");
            DetailError::unauthorized(e)
        })
    }

    async fn load_article(&self, id: i64) -> Result<Article, DetailError> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| not_found_or_internal(e, ErrorCode::ArticleNotFound))
    }

    async fn evict(&self, id: i64) -> Result<(), DetailError> {
        self.cache.delete_article(id).await.map_err(|e| {
            tracing::error!(error = %e, article_id = id, "failed to evict article from cache");
            DetailError::internal(e)
        })
    }
}

/// Maps the repository's not-found signal to `not_found`, anything else to an
/// internal error.
fn not_found_or_internal(e: RepositoryError, not_found: ErrorCode) -> DetailError {
    if e.is_not_found() {
        DetailError::wrap(not_found, e)
    } else {
        tracing::error!(error = %e, "storage failure");
        DetailError::internal(e)
    }
}
