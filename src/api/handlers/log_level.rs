//! Handler for changing the log filter at runtime.

use axum::{Json, extract::State};

use crate::api::dto::log_level::{LogLevelRequest, LogLevelResponse};
use crate::api::extract::ValidatedJson;
use crate::error::DetailError;
use crate::state::AppState;
use crate::telemetry::TelemetryError;

/// Swaps the active log filter.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/log-level` (Bearer token of an admin user)
///
/// # Request Body
///
/// ```json
/// { "level": "debug" }
/// ```
///
/// # Errors
///
/// **400** if the level cannot be parsed as a filter directive.
pub async fn set_log_level_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LogLevelRequest>,
) -> Result<Json<LogLevelResponse>, DetailError> {
    state
        .log_level
        .set_level(&payload.level)
        .map_err(|e| match e {
            TelemetryError::InvalidFilter { .. } => DetailError::invalid_params(e),
            _ => DetailError::internal(e),
        })?;

    Ok(Json(LogLevelResponse {
        message: format!("log level changed to {}", payload.level),
    }))
}
