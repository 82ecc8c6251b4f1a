//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{User, UserProfile};
use crate::domain::repositories::{RepositoryError, UserRepository};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    nickname: Option<String>,
    avatar: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            profile: UserProfile {
                nickname: row.nickname,
                avatar: row.avatar,
            },
        }
    }
}

const SELECT_USER: &str =
    "SELECT id, username, email, password_hash, nickname, avatar FROM users";

/// PostgreSQL repository for user accounts.
///
/// Username and email are unique; a duplicate insert surfaces as
/// [`RepositoryError::Conflict`].
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn find_one(&self, filter: &str, value: &str) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE {filter} = $1"))
            .bind(value)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash, nickname, avatar)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, nickname, avatar
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.profile.nickname)
        .bind(&user.profile.avatar)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.find_one("email", email).await
    }
}
