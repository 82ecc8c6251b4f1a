//! Audit sink port.

use crate::domain::entities::AuditEvent;

/// Records business events for later review.
///
/// Recording never fails the calling operation.
#[cfg_attr(test, mockall::automock)]
pub trait AuditService: Send + Sync {
    fn record_event(&self, event: AuditEvent);
}
