//! Audit sink backed by the `tracing` dispatcher.

use crate::application::ports::AuditService;
use crate::domain::entities::AuditEvent;

/// Target under which audit records are emitted, so they can be filtered or
/// routed separately (`RUST_LOG=audit=info`).
pub const AUDIT_TARGET: &str = "audit";

/// Writes each [`AuditEvent`] as one structured INFO event.
///
/// Events are emitted inside a span carrying `log_type = "audit"`, so every
/// subscriber layer sees the marker without the call sites repeating it.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditService;

impl TracingAuditService {
    pub fn new() -> Self {
        Self
    }
}

impl AuditService for TracingAuditService {
    fn record_event(&self, event: AuditEvent) {
        let span = tracing::info_span!(target: AUDIT_TARGET, "audit", log_type = "audit");
        let _guard = span.enter();

        let details = match serde_json::to_string(&event.details) {
            Ok(details) => details,
            Err(e) => {
                tracing::error!(target: AUDIT_TARGET, error = %e, action = %event.action, "failed to serialize audit details");
                return;
            }
        };

        tracing::info!(
            target: AUDIT_TARGET,
            timestamp = %event.timestamp.to_rfc3339(),
            user_id = event.user_id,
            action = %event.action,
            entity = %event.entity,
            entity_id = event.entity_id,
            details = %details,
            "audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    type Fields = BTreeMap<String, String>;

    #[derive(Default)]
    struct FieldVisitor(Fields);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    #[derive(Debug)]
    struct Captured {
        target: String,
        level: Level,
        fields: Fields,
        spans: Vec<(String, Fields)>,
    }

    /// Records every event together with the fields of its enclosing spans.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            attrs.record(&mut visitor);
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(visitor.0);
            }
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);

            let spans = ctx
                .event_scope(event)
                .map(|scope| {
                    scope
                        .from_root()
                        .map(|span| {
                            let fields = span.extensions().get::<Fields>().cloned();
                            (span.name().to_string(), fields.unwrap_or_default())
                        })
                        .collect()
                })
                .unwrap_or_default();

            self.events.lock().unwrap().push(Captured {
                target: event.metadata().target().to_string(),
                level: *event.metadata().level(),
                fields: visitor.0,
                spans,
            });
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let layer = CaptureLayer::default();
        let events = layer.events.clone();
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, f);

        std::mem::take(&mut *events.lock().unwrap())
    }

    #[test]
    fn test_record_event_emits_structured_audit_record() {
        let event = AuditEvent::new(7, "article.create", "article", 42)
            .with_detail("title", "Hello")
            .with_detail("tags", json!(["rust"]));
        let timestamp = event.timestamp.to_rfc3339();

        let events = capture(|| TracingAuditService::new().record_event(event));

        assert_eq!(events.len(), 1);
        let record = &events[0];
        assert_eq!(record.target, AUDIT_TARGET);
        assert_eq!(record.level, Level::INFO);

        let fields = &record.fields;
        assert_eq!(fields["message"], "audit event");
        assert_eq!(fields["timestamp"], timestamp);
        assert_eq!(fields["user_id"], "7");
        assert_eq!(fields["action"], "article.create");
        assert_eq!(fields["entity"], "article");
        assert_eq!(fields["entity_id"], "42");

        let details: serde_json::Value = serde_json::from_str(&fields["details"]).unwrap();
        assert_eq!(details, json!({ "title": "Hello", "tags": ["rust"] }));

        let (span_name, span_fields) = &record.spans[0];
        assert_eq!(span_name, "audit");
        assert_eq!(span_fields["log_type"], "audit");
    }

    #[test]
    fn test_record_event_with_empty_details() {
        let events = capture(|| {
            TracingAuditService::new().record_event(AuditEvent::new(
                3,
                "article.delete",
                "article",
                9,
            ))
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fields["details"], "{}");
        assert_eq!(events[0].fields["action"], "article.delete");
    }
}
