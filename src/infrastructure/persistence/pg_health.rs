//! Database liveness probe.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Reports whether the store of record answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    async fn ping(&self) -> bool;
}

/// Runs `SELECT 1` against the pool.
pub struct PgDatabaseHealth {
    pool: Arc<PgPool>,
}

impl PgDatabaseHealth {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealth for PgDatabaseHealth {
    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "database health check failed");
                false
            }
        }
    }
}
