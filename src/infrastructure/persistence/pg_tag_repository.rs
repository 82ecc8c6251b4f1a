//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::{RepositoryError, TagRepository};

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    id: i64,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            name: row.name,
        }
    }
}

/// PostgreSQL repository for the tag catalogue.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Tag, RepositoryError> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = $1")
            .bind(name)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn save(&self, tag: Tag) -> Result<Tag, RepositoryError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(&tag.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
