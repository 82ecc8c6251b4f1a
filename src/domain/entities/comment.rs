//! Comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reader's comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
