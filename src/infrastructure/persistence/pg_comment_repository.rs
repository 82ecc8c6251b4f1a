//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Comment;
use crate::domain::repositories::{CommentRepository, RepositoryError};

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            article_id: row.article_id,
            user_id: row.user_id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_article_id(&self, article_id: i64) -> Result<Vec<Comment>, RepositoryError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, article_id, user_id, content, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepositoryError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (article_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, user_id, content, created_at
            "#,
        )
        .bind(comment.article_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
