//! Handler for the tag catalogue.

use axum::{Json, extract::State};

use crate::domain::entities::Tag;
use crate::error::DetailError;
use crate::state::AppState;

/// `GET /api/v1/tags`
pub async fn list_tags_handler(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, DetailError> {
    Ok(Json(state.tag_service.list_tags().await?))
}
