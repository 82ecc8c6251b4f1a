//! PostgreSQL implementation of the article repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Article, Tag};
use crate::domain::repositories::{ArticleRepository, RepositoryError};

use super::pg_tag_repository::TagRow;

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    id: i64,
    name: String,
}

impl ArticleRow {
    fn into_article(self, tags: Vec<Tag>) -> Article {
        Article {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            tags,
        }
    }
}

/// PostgreSQL repository for articles and their tag associations.
///
/// Tags are upserted by name when an article is created, and always read back
/// ordered by name.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn upsert_tag(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Tag, RepositoryError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row.into())
    }

    async fn tags_for(&self, article_id: i64) -> Result<Vec<Tag>, RepositoryError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN article_tags at ON at.tag_id = t.id
            WHERE at.article_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn create(&self, article: Article) -> Result<Article, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            INSERT INTO articles (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.author_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut tags = Vec::with_capacity(article.tags.len());
        for name in article.tag_names() {
            let tag = Self::upsert_tag(&mut tx, name).await?;

            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(row.id)
            .bind(tag.id)
            .execute(&mut *tx)
            .await?;

            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        tx.commit().await?;

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(row.into_article(tags))
    }

    async fn get_by_id(&self, id: i64) -> Result<Article, RepositoryError> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, author_id FROM articles WHERE id = $1",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        let tags = self.tags_for(id).await?;
        Ok(row.into_article(tags))
    }

    async fn get_all(&self) -> Result<Vec<Article>, RepositoryError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, author_id FROM articles ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let tag_rows = sqlx::query_as::<_, ArticleTagRow>(
            r#"
            SELECT at.article_id, t.id, t.name
            FROM article_tags at
            JOIN tags t ON t.id = at.tag_id
            WHERE at.article_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut tags_by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
        for r in tag_rows {
            tags_by_article.entry(r.article_id).or_default().push(Tag {
                id: r.id,
                name: r.name,
            });
        }

        Ok(rows
            .into_iter()
            .map(|r| {
                let tags = tags_by_article.remove(&r.id).unwrap_or_default();
                r.into_article(tags)
            })
            .collect())
    }

    async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET title = $1, content = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
