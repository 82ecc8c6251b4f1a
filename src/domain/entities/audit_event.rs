//! Audit record for business events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// An immutable record of a business action, handed once to the audit sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub action: String,
    pub entity: String,
    pub entity_id: i64,
    pub details: Map<String, Value>,
}

impl AuditEvent {
    /// Creates an event stamped with the current time.
    pub fn new(
        user_id: i64,
        action: impl Into<String>,
        entity: impl Into<String>,
        entity_id: i64,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id,
            action: action.into(),
            entity: entity.into(),
            entity_id,
            details: Map::new(),
        }
    }

    /// Adds a free-form detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audit_event_details() {
        let event = AuditEvent::new(7, "article.create", "article", 42)
            .with_detail("title", "Hello")
            .with_detail("tags", json!(["rust"]));

        assert_eq!(event.user_id, 7);
        assert_eq!(event.action, "article.create");
        assert_eq!(event.entity, "article");
        assert_eq!(event.entity_id, 42);
        assert_eq!(event.details["title"], "Hello");
        assert_eq!(event.details["tags"], json!(["rust"]));
    }
}
