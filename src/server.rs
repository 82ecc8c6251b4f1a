//! HTTP server initialization and runtime setup.
//!
//! Builds the database pool, cache, adapters and services, then runs the Axum
//! server until Ctrl-C.

use crate::application::ports::AuthService;
use crate::application::services::{ArticleService, TagService, TracingAuditService, UserService};
use crate::config::Config;
use crate::domain::repositories::ArticleCache;
use crate::infrastructure::auth::JwtAuthService;
use crate::infrastructure::cache::{NullCache, RedisArticleCache};
use crate::infrastructure::persistence::{
    PgArticleRepository, PgDatabaseHealth, PgTagRepository, PgUserRepository,
};
use crate::infrastructure::security::Argon2PasswordHasher;
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry::LogLevelHandle;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Services and their adapters
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, log_level: LogLevelHandle) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let cache = connect_cache(&config).await;

    let state = build_state(Arc::new(pool), cache, &config, log_level);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to Redis when configured, falling back to [`NullCache`].
async fn connect_cache(config: &Config) -> Arc<dyn ArticleCache> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisArticleCache::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Wires adapters into services.
fn build_state(
    pool: Arc<sqlx::PgPool>,
    cache: Arc<dyn ArticleCache>,
    config: &Config,
    log_level: LogLevelHandle,
) -> AppState {
    let auth: Arc<dyn AuthService> = Arc::new(JwtAuthService::new(
        &config.jwt_secret,
        config.jwt_expires_minutes,
    ));
    let audit = Arc::new(TracingAuditService::new());

    let article_service = Arc::new(ArticleService::new(
        Arc::new(PgArticleRepository::new(pool.clone())),
        cache.clone(),
        auth.clone(),
        audit.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(Argon2PasswordHasher::new()),
        auth.clone(),
        audit,
    ));
    let tag_service = Arc::new(TagService::new(Arc::new(PgTagRepository::new(
        pool.clone(),
    ))));

    AppState {
        article_service,
        user_service,
        tag_service,
        auth,
        cache,
        database: Arc::new(PgDatabaseHealth::new(pool)),
        log_level,
        admin_user_ids: Arc::new(config.admin_user_ids.iter().copied().collect()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
