//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::application::ports::AuthenticatedUser;
use crate::{error::DetailError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate signature and expiry through the auth port
/// 3. Attach [`AuthenticatedUser`] to the request extensions
/// 4. Continue to next middleware/handler
///
/// Handlers read the identity back through the
/// [`crate::application::ports::RequestContext`] extractor.
///
/// # Errors
///
/// Returns `401 Unauthorized` (code `10003`) if the header is missing, the
/// token is malformed, expired, or signed with another key.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/articles", post(create_article_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, DetailError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| DetailError::unauthorized("authorization header is missing or invalid"))?;

    let user_id = st.auth.validate_token(&token).map_err(|e| {
        tracing::warn!(error = %e, "bearer token rejected");
        DetailError::unauthorized(e)
    })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
