//! Lead notification mailer.
//!
//! Composes the plain-text lead summary sent to the fixed operations
//! mailbox. With no provider configured, the payload goes to the
//! operational log instead; send failures are logged and swallowed.

use crate::providers::{EmailContent, EmailProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// All fields of a booking lead, as they appear in the email body.
#[derive(Debug, Clone, Serialize)]
pub struct LeadNotification {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub venue: String,
    pub date: String,
    pub party_size: i32,
    pub intent: String,
    pub budget_range: String,
    pub arrival_window: String,
    pub notes: String,
    pub source_page: String,
}

/// What happened to the notification step. Persistence succeeded either
/// way; callers and tests use this to tell "saved, notified" from
/// "saved, not notified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationOutcome {
    /// Provider accepted the message
    Sent,
    /// No provider configured; payload written to the log
    Logged,
    /// Provider configured but the send failed (swallowed)
    Failed,
}

/// Sends lead summaries to the operations mailbox.
#[derive(Clone)]
pub struct LeadMailer {
    recipient: String,
    provider: Option<Arc<dyn EmailProvider>>,
}

impl LeadMailer {
    pub fn new(recipient: impl Into<String>, provider: Option<Arc<dyn EmailProvider>>) -> Self {
        Self {
            recipient: recipient.into(),
            provider,
        }
    }

    /// Mailer that only logs, for deployments without an email credential.
    pub fn log_only(recipient: impl Into<String>) -> Self {
        Self::new(recipient, None)
    }

    /// Best-effort dispatch. Never returns an error; the outcome is
    /// reported so callers can surface it without failing the request.
    pub async fn notify(&self, lead: &LeadNotification) -> NotificationOutcome {
        let Some(provider) = &self.provider else {
            info!(
                target: "leads",
                payload = %serde_json::to_string(lead).unwrap_or_default(),
                "Email provider not configured; logging lead instead"
            );
            return NotificationOutcome::Logged;
        };

        let content = EmailContent {
            to_email: self.recipient.clone(),
            to_name: String::new(),
            subject: subject_line(lead),
            text_body: body_text(lead),
        };

        match provider.send(&content).await {
            Ok(sent) => {
                if !sent.accepted {
                    warn!(provider = provider.name(), "Lead notification not accepted");
                }
                NotificationOutcome::Sent
            }
            Err(e) => {
                error!(provider = provider.name(), "Lead notification failed: {}", e);
                NotificationOutcome::Failed
            }
        }
    }
}

fn subject_line(lead: &LeadNotification) -> String {
    format!(
        "New {} lead — {} ({})",
        lead.intent.to_uppercase(),
        lead.name,
        lead.venue
    )
}

fn body_text(lead: &LeadNotification) -> String {
    [
        format!("Name: {}", lead.name),
        format!("Phone: {}", lead.phone),
        format!("Email: {}", lead.email),
        format!("Venue: {}", lead.venue),
        format!("Date: {}", lead.date),
        format!("Party size: {}", lead.party_size),
        format!("Intent: {}", lead.intent),
        format!("Budget: {}", lead.budget_range),
        format!("Arrival: {}", lead.arrival_window),
        format!("Notes: {}", lead.notes),
        format!("Source: {}", lead.source_page),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotificationError;
    use crate::providers::{MockEmailProvider, SentEmail};

    fn sample_lead() -> LeadNotification {
        LeadNotification {
            name: "Jordan Reyes".to_string(),
            phone: "4805551234".to_string(),
            email: "jordan@example.com".to_string(),
            venue: "Casa Nocturna".to_string(),
            date: "2026-03-17".to_string(),
            party_size: 6,
            intent: "guestlist".to_string(),
            budget_range: "$500-$1000".to_string(),
            arrival_window: "10-11pm".to_string(),
            notes: "Birthday".to_string(),
            source_page: "scottsdale-guestlist".to_string(),
        }
    }

    #[test]
    fn test_subject_embeds_intent_and_venue() {
        let subject = subject_line(&sample_lead());
        assert_eq!(subject, "New GUESTLIST lead — Jordan Reyes (Casa Nocturna)");
    }

    #[test]
    fn test_body_lists_all_fields() {
        let body = body_text(&sample_lead());
        for line in [
            "Name: Jordan Reyes",
            "Phone: 4805551234",
            "Email: jordan@example.com",
            "Venue: Casa Nocturna",
            "Date: 2026-03-17",
            "Party size: 6",
            "Intent: guestlist",
            "Budget: $500-$1000",
            "Arrival: 10-11pm",
            "Notes: Birthday",
            "Source: scottsdale-guestlist",
        ] {
            assert!(body.contains(line), "missing line: {line}");
        }
    }

    #[tokio::test]
    async fn test_no_provider_logs_instead_of_sending() {
        let mailer = LeadMailer::log_only("bookings@afterdarkevents.com");
        let outcome = mailer.notify(&sample_lead()).await;
        assert_eq!(outcome, NotificationOutcome::Logged);
    }

    #[tokio::test]
    async fn test_provider_success_reports_sent() {
        let mut provider = MockEmailProvider::new();
        provider.expect_send().times(1).returning(|_| {
            Ok(SentEmail {
                message_id: Some("abc".to_string()),
                accepted: true,
            })
        });
        provider.expect_name().return_const("mock");

        let mailer = LeadMailer::new("ops@example.com", Some(Arc::new(provider)));
        let outcome = mailer.notify(&sample_lead()).await;
        assert_eq!(outcome, NotificationOutcome::Sent);
    }

    #[tokio::test]
    async fn test_provider_failure_is_swallowed() {
        let mut provider = MockEmailProvider::new();
        provider
            .expect_send()
            .times(1)
            .returning(|_| Err(NotificationError::Transport("connection refused".to_string())));
        provider.expect_name().return_const("mock");

        let mailer = LeadMailer::new("ops@example.com", Some(Arc::new(provider)));
        let outcome = mailer.notify(&sample_lead()).await;
        assert_eq!(outcome, NotificationOutcome::Failed);
    }
}
