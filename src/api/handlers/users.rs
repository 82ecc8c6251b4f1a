//! Handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::api::extract::ValidatedJson;
use crate::error::DetailError;
use crate::state::AppState;

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /api/v1/register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "secret", "email": "alice@example.com" }
/// ```
///
/// # Errors
///
/// - **400** with code `20001` if the username is taken
/// - **400** with code `10002` for invalid input
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), DetailError> {
    state.user_service.register(payload.into_user()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /api/v1/login`
///
/// # Errors
///
/// **401** with code `20003` for an unknown user or a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, DetailError> {
    let token = state
        .user_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
