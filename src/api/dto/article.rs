//! DTOs for article endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Article, Tag};

/// Request to publish a new article.
///
/// ```json
/// { "title": "Hello", "content": "...", "tags": ["rust", "axum"] }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    /// Tag names; unknown tags are created on the fly.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateArticleRequest {
    pub fn into_article(self) -> Article {
        Article::new(
            self.title,
            self.content,
            self.tags.into_iter().map(Tag::new).collect(),
        )
    }
}

/// Replacement title and content for an existing article.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

impl UpdateArticleRequest {
    pub fn into_article(self, id: i64) -> Article {
        let mut article = Article::new(self.title, self.content, Vec::new());
        article.id = id;
        article
    }
}

/// Acknowledgement body for writes that return no entity.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
