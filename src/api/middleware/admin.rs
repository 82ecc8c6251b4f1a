//! Admin authorization middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::ports::AuthenticatedUser;
use crate::{error::DetailError, state::AppState};

/// Lets through only users listed in `ADMIN_USER_IDS`.
///
/// Must run after [`super::auth::layer`], which attaches the
/// [`AuthenticatedUser`]. With no admin configured every request is rejected.
///
/// # Errors
///
/// Returns `401 Unauthorized` (code `10003`) for anonymous requests and for
/// authenticated users who are not admins.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, DetailError> {
    let user_id = req
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.user_id)
        .ok_or_else(|| DetailError::unauthorized("no authenticated user"))?;

    if !st.admin_user_ids.contains(&user_id) {
        tracing::warn!(user_id, path = %req.uri().path(), "non-admin user denied");
        return Err(DetailError::unauthorized("admin privileges required"));
    }

    Ok(next.run(req).await)
}
