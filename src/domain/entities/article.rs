//! Article entity and its persistence-independent invariants.

use serde::{Deserialize, Serialize};

use super::{EntityError, Tag};

/// A blog article.
///
/// The `id` is assigned by persistence; a freshly built article carries `0`
/// until the repository returns the stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub tags: Vec<Tag>,
}

impl Article {
    /// Creates an unsaved article with no author yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            author_id: 0,
            tags,
        }
    }

    /// Checks that title, content and author are all present.
    ///
    /// Fields are checked in that order and the first missing one is reported.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.title.is_empty() {
            return Err(EntityError::TitleRequired);
        }
        if self.content.is_empty() {
            return Err(EntityError::ContentRequired);
        }
        if self.author_id == 0 {
            return Err(EntityError::AuthorRequired);
        }
        Ok(())
    }

    /// Tag names in stored order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}
