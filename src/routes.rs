//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: database and cache (public)
//! - `/api/v1/*`     - REST API; writes require a Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on register and login
//! - **Authentication** - Bearer token on write and admin endpoints
//! - **Authorization** - Configured admin users on `/admin/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin, auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the versioned API router without rate limiting.
///
/// Protected routes get the bearer middleware; merging keeps one router per
/// path so `GET` and `PUT` on `/articles/{id}` coexist. Admin routes get the
/// bearer middleware outermost, then the admin check.
pub fn api_router(state: AppState) -> Router<AppState> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::layer))
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .merge(admin)
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let credentials = api::routes::credential_routes().layer(rate_limit::credentials_layer());

    let api_v1 = api_router(state.clone()).merge(credentials);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_v1)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
