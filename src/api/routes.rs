//! API route configuration.
//!
//! Routes are split by access level so the composition root can attach the
//! bearer middleware to the protected and admin sets, and the admin check to
//! the admin set only.

use crate::api::handlers::{
    create_article_handler, delete_article_handler, get_article_handler, list_articles_handler,
    list_tags_handler, login_handler, register_handler, set_log_level_handler,
    update_article_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Credential endpoints, rate limited by the caller.
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Exchange credentials for a token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Anonymous read endpoints.
///
/// - `GET /articles`      - List articles
/// - `GET /articles/{id}` - Fetch one article
/// - `GET /tags`          - List tags
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/articles/{id}", get(get_article_handler))
        .route("/tags", get(list_tags_handler))
}

/// Endpoints that require a Bearer token.
///
/// - `POST   /articles`        - Publish an article
/// - `PUT    /articles/{id}`   - Update own article
/// - `DELETE /articles/{id}`   - Delete own article
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", post(create_article_handler))
        .route(
            "/articles/{id}",
            put(update_article_handler).delete(delete_article_handler),
        )
}

/// Operator endpoints: Bearer token of a configured admin user.
///
/// - `PUT /admin/log-level` - Change the log filter
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/log-level", put(set_log_level_handler))
}
