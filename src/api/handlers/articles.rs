//! Handlers for article endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::article::{CreateArticleRequest, StatusResponse, UpdateArticleRequest};
use crate::api::extract::{IdPath, ValidatedJson};
use crate::application::ports::RequestContext;
use crate::domain::entities::Article;
use crate::error::DetailError;
use crate::state::AppState;

/// Publishes an article authored by the caller.
///
/// # Endpoint
///
/// `POST /api/v1/articles` (Bearer token required)
///
/// # Response
///
/// **201 Created** with the stored article, including its id and tags.
pub async fn create_article_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(payload): ValidatedJson<CreateArticleRequest>,
) -> Result<(StatusCode, Json<Article>), DetailError> {
    let article = state
        .article_service
        .create_article(&ctx, payload.into_article())
        .await?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// Lists every article.
///
/// `GET /api/v1/articles`
pub async fn list_articles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, DetailError> {
    Ok(Json(state.article_service.get_all_articles().await?))
}

/// `GET /api/v1/articles/{id}`
///
/// # Errors
///
/// - **400** if `id` is not an integer
/// - **404** if the article does not exist
pub async fn get_article_handler(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Article>, DetailError> {
    Ok(Json(state.article_service.get_article_by_id(id).await?))
}

/// Replaces title and content of one of the caller's articles.
///
/// # Endpoint
///
/// `PUT /api/v1/articles/{id}` (Bearer token required)
///
/// # Response
///
/// ```json
/// { "status": "article updated" }
/// ```
///
/// # Errors
///
/// - **401** if the caller is not the author
/// - **404** if the article does not exist
pub async fn update_article_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateArticleRequest>,
) -> Result<Json<StatusResponse>, DetailError> {
    state
        .article_service
        .update_article(&ctx, payload.into_article(id))
        .await?;

    Ok(Json(StatusResponse::new("article updated")))
}

/// `DELETE /api/v1/articles/{id}` (Bearer token required)
pub async fn delete_article_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    IdPath(id): IdPath,
) -> Result<Json<StatusResponse>, DetailError> {
    state.article_service.delete_article(&ctx, id).await?;

    Ok(Json(StatusResponse::new("article deleted")))
}
