#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use blog_backend::application::ports::AuthService;
use blog_backend::application::services::{
    ArticleService, TagService, TracingAuditService, UserService,
};
use blog_backend::domain::entities::{Article, Tag, User};
use blog_backend::domain::repositories::{
    ArticleCache, ArticleRepository, CacheError, CacheResult, RepositoryError, TagRepository,
    UserRepository,
};
use blog_backend::infrastructure::auth::JwtAuthService;
use blog_backend::infrastructure::cache::NullCache;
use blog_backend::infrastructure::persistence::DatabaseHealth;
use blog_backend::infrastructure::security::Argon2PasswordHasher;
use blog_backend::routes::app_router;
use blog_backend::state::AppState;
use blog_backend::telemetry::LogLevelHandle;
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Only user allowed on `/admin/*` in tests. Far above ids the store assigns.
pub const ADMIN_USER_ID: i64 = 9_999;

/// In-memory stand-in for PostgreSQL, shared by all repository ports.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    next_id: i64,
    articles: HashMap<i64, Article>,
    users: HashMap<i64, User>,
    tags: HashMap<String, Tag>,
}

impl StoreInner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn upsert_tag(&mut self, name: &str) -> Tag {
        if let Some(tag) = self.tags.get(name) {
            return tag.clone();
        }
        let tag = Tag {
            id: self.next_id(),
            name: name.to_string(),
        };
        self.tags.insert(name.to_string(), tag.clone());
        tag
    }
}

impl InMemoryStore {
    pub fn article_count(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn create(&self, mut article: Article) -> Result<Article, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        article.id = inner.next_id();

        let mut tags: Vec<Tag> = Vec::new();
        for name in article.tag_names() {
            let tag = inner.upsert_tag(name);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        article.tags = tags;

        inner.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn get_by_id(&self, id: i64) -> Result<Article, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .articles
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Article>, RepositoryError> {
        let mut articles: Vec<Article> =
            self.inner.lock().unwrap().articles.values().cloned().collect();
        articles.sort_by_key(|a| a.id);
        Ok(articles)
    }

    async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .articles
            .get_mut(&article.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.title = article.title.clone();
        stored.content = article.content.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, mut user: User) -> Result<User, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepositoryError::Conflict("users_username_key".to_string()));
        }
        user.id = inner.next_id();
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .users
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let mut tags: Vec<Tag> = self.inner.lock().unwrap().tags.values().cloned().collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn find_by_name(&self, name: &str) -> Result<Tag, RepositoryError> {
        self.inner
            .lock()
            .unwrap()
            .tags
            .get(name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, tag: Tag) -> Result<Tag, RepositoryError> {
        Ok(self.inner.lock().unwrap().upsert_tag(&tag.name))
    }
}

/// Cache whose backend is permanently down.
pub struct UnavailableCache;

fn down() -> CacheError {
    CacheError::Connection("connection refused".to_string())
}

#[async_trait]
impl ArticleCache for UnavailableCache {
    async fn get_article(&self, _id: i64) -> CacheResult<Option<Article>> {
        Err(down())
    }

    async fn set_article(&self, _article: &Article, _ttl: Duration) -> CacheResult<()> {
        Err(down())
    }

    async fn get_articles(&self, _key: &str) -> CacheResult<Option<Vec<Article>>> {
        Err(down())
    }

    async fn set_articles(
        &self,
        _key: &str,
        _articles: &[Article],
        _ttl: Duration,
    ) -> CacheResult<()> {
        Err(down())
    }

    async fn delete_article(&self, _id: i64) -> CacheResult<()> {
        Err(down())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Database probe with a fixed answer.
pub struct StaticHealth(pub bool);

#[async_trait]
impl DatabaseHealth for StaticHealth {
    async fn ping(&self) -> bool {
        self.0
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
    pub auth: Arc<JwtAuthService>,
}

impl TestApp {
    /// Issues a valid token for `user_id` without going through login.
    pub fn token_for(&self, user_id: i64) -> String {
        self.auth.generate_token(user_id).unwrap()
    }

    /// Token of the configured admin user.
    pub fn admin_token(&self) -> String {
        self.token_for(ADMIN_USER_ID)
    }
}

pub fn create_test_state(
    store: Arc<InMemoryStore>,
    cache: Arc<dyn ArticleCache>,
    database: Arc<dyn DatabaseHealth>,
    auth: Arc<JwtAuthService>,
) -> AppState {
    let audit = Arc::new(TracingAuditService::new());

    AppState {
        article_service: Arc::new(ArticleService::new(
            store.clone(),
            cache.clone(),
            auth.clone(),
            audit.clone(),
        )),
        user_service: Arc::new(UserService::new(
            store.clone(),
            Arc::new(Argon2PasswordHasher::new()),
            auth.clone(),
            audit,
        )),
        tag_service: Arc::new(TagService::new(store)),
        auth,
        cache,
        database,
        log_level: LogLevelHandle::detached("info").unwrap(),
        admin_user_ids: Arc::new(HashSet::from([ADMIN_USER_ID])),
    }
}

/// The production router, served over a real socket so the rate limiter sees
/// the peer address.
pub fn build_app(cache: Arc<dyn ArticleCache>, database: Arc<dyn DatabaseHealth>) -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    let auth = Arc::new(JwtAuthService::new(TEST_JWT_SECRET, 60));
    let state = create_test_state(store.clone(), cache, database, auth.clone());

    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(state),
    );

    TestApp {
        server: TestServer::new(app).unwrap(),
        store,
        auth,
    }
}

pub fn test_app() -> TestApp {
    build_app(Arc::new(NullCache::new()), Arc::new(StaticHealth(true)))
}

/// Inserts a user row directly and returns its id.
pub async fn insert_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, 'hash') RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}
