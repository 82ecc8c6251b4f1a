//! Tag entity.

use serde::{Deserialize, Serialize};

/// A named label attached to articles.
///
/// Names are unique; uniqueness is enforced by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    /// Creates an unsaved tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
