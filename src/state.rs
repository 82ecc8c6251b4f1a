//! Shared application state injected into every handler.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::AuthService;
use crate::application::services::{ArticleService, TagService, UserService};
use crate::domain::repositories::ArticleCache;
use crate::infrastructure::persistence::DatabaseHealth;
use crate::telemetry::LogLevelHandle;

/// Services and probes built once by the composition root.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
    pub user_service: Arc<UserService>,
    pub tag_service: Arc<TagService>,
    /// Validates bearer tokens in the auth middleware.
    pub auth: Arc<dyn AuthService>,
    pub cache: Arc<dyn ArticleCache>,
    pub database: Arc<dyn DatabaseHealth>,
    pub log_level: LogLevelHandle,
    /// Users allowed through the admin middleware.
    pub admin_user_ids: Arc<HashSet<i64>>,
}
