//! Structured audit logging for admin mutations.
//!
//! Events are emitted to the `audit` tracing target so the logging
//! backend can route them separately from application logs.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of an audited action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
    Denied,
}

/// A security-relevant event (event created, image uploaded, password
/// rejected, ...). Build with [`AuditEvent::new`], then call `.log()`.
#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Action identifier, e.g. "event.create", "media.upload"
    pub action: String,
    /// Affected resource, e.g. "event:018f..."
    pub resource: Option<String>,
    pub outcome: AuditOutcome,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, resource: Option<String>, outcome: AuditOutcome) -> Self {
        Self {
            action: action.into(),
            resource,
            outcome,
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Emit the event to the audit log.
    pub fn log(self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = self.resource,
            outcome = ?self.outcome,
            details = ?self.details,
            "audit event"
        );
    }
}
