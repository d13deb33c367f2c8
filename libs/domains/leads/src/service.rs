use domain_notifications::{LeadMailer, LeadNotification, NotificationOutcome};
use std::sync::Arc;
use validator::Validate;

use crate::error::{LeadError, LeadResult};
use crate::models::{ContactInquiry, CrawlHostInquiry, CreateLead, HospitalityInquiry, Lead, NewsletterSignup};
use crate::repository::LeadRepository;

/// Outcome of a booking-lead submission. The lead is persisted; the
/// notification step is best-effort and reported separately.
#[derive(Debug, Clone)]
pub struct LeadSubmission {
    pub lead: Lead,
    pub notification: NotificationOutcome,
}

/// Service layer for form submissions.
///
/// Booking leads run the full pipeline: validate, persist exactly one
/// row, then notify the operations mailbox. The other inquiry types
/// validate and persist only.
#[derive(Clone)]
pub struct LeadService<R: LeadRepository> {
    repository: Arc<R>,
    mailer: LeadMailer,
}

impl<R: LeadRepository> LeadService<R> {
    pub fn new(repository: R, mailer: LeadMailer) -> Self {
        Self {
            repository: Arc::new(repository),
            mailer,
        }
    }

    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Full booking-lead pipeline. Persistence failures abort before
    /// any email is attempted; notification failures never surface as
    /// submission failures.
    pub async fn submit_lead(&self, input: CreateLead) -> LeadResult<LeadSubmission> {
        input
            .validate()
            .map_err(|e| LeadError::Validation(e.to_string()))?;

        let lead = self.repository.insert_lead(Lead::new(input)).await?;

        let notification = self.mailer.notify(&LeadNotification::from(&lead)).await;

        Ok(LeadSubmission { lead, notification })
    }

    pub async fn submit_contact(&self, input: ContactInquiry) -> LeadResult<()> {
        input
            .validate()
            .map_err(|e| LeadError::Validation(e.to_string()))?;
        self.repository.insert_contact(input).await
    }

    pub async fn submit_hospitality(&self, input: HospitalityInquiry) -> LeadResult<()> {
        input
            .validate()
            .map_err(|e| LeadError::Validation(e.to_string()))?;
        self.repository.insert_hospitality(input).await
    }

    pub async fn submit_crawl_host(&self, input: CrawlHostInquiry) -> LeadResult<()> {
        input
            .validate()
            .map_err(|e| LeadError::Validation(e.to_string()))?;
        self.repository.insert_crawl_host(input).await
    }

    /// Subscribe an email to the newsletter. Re-subscribing the same
    /// email succeeds without creating a second row.
    pub async fn subscribe_newsletter(&self, input: NewsletterSignup) -> LeadResult<()> {
        input
            .validate()
            .map_err(|e| LeadError::Validation(e.to_string()))?;
        self.repository.upsert_newsletter(input.email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadIntent;
    use crate::repository::{InMemoryLeadRepository, MockLeadRepository};
    use async_trait::async_trait;
    use domain_notifications::{
        EmailContent, EmailProvider, NotificationError, NotificationResult, SentEmail,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts sends and returns a fixed outcome.
    struct StubProvider {
        sends: Arc<AtomicUsize>,
        fail: bool,
    }

    impl StubProvider {
        fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
            let sends = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    sends: Arc::clone(&sends),
                    fail,
                },
                sends,
            )
        }
    }

    #[async_trait]
    impl EmailProvider for StubProvider {
        async fn send(&self, _email: &EmailContent) -> NotificationResult<SentEmail> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(NotificationError::Transport("timeout".to_string()))
            } else {
                Ok(SentEmail {
                    message_id: Some("abc".to_string()),
                    accepted: true,
                })
            }
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn mailer() -> LeadMailer {
        LeadMailer::log_only("bookings@afterdarkevents.com")
    }

    fn lead_input() -> CreateLead {
        CreateLead {
            name: "Jordan Reyes".to_string(),
            phone: "4805551234".to_string(),
            email: "jordan@example.com".to_string(),
            venue: "Casa Nocturna".to_string(),
            date: "2026-03-17".to_string(),
            party_size: 6,
            intent: LeadIntent::Guestlist,
            budget_range: String::new(),
            arrival_window: String::new(),
            notes: String::new(),
            source_page: String::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_lead_persists_exactly_one_row() {
        let repo = InMemoryLeadRepository::new();
        let service = LeadService::new(repo, mailer());

        let submission = service.submit_lead(lead_input()).await.unwrap();

        assert_eq!(service.repository().lead_count().await, 1);
        assert_eq!(submission.lead.status, "new");
        assert_eq!(submission.notification, NotificationOutcome::Logged);
    }

    #[tokio::test]
    async fn test_invalid_lead_never_reaches_store() {
        let mut repo = MockLeadRepository::new();
        repo.expect_insert_lead().times(0);

        let service = LeadService::new(repo, mailer());

        let mut input = lead_input();
        input.party_size = 0;

        let result = service.submit_lead(input).await;
        assert!(matches!(result, Err(LeadError::Validation(_))));
    }

    #[tokio::test]
    async fn test_store_failure_skips_notification() {
        let mut repo = MockLeadRepository::new();
        repo.expect_insert_lead()
            .returning(|_| Err(LeadError::NotProvisioned("leads".to_string())));

        let (provider, sends) = StubProvider::new(false);
        let service = LeadService::new(
            repo,
            LeadMailer::new("ops@example.com", Some(Arc::new(provider))),
        );

        let result = service.submit_lead(lead_input()).await;
        assert!(matches!(result, Err(LeadError::NotProvisioned(_))));
        assert_eq!(sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_notification_failure_still_succeeds() {
        let (provider, sends) = StubProvider::new(true);
        let service = LeadService::new(
            InMemoryLeadRepository::new(),
            LeadMailer::new("ops@example.com", Some(Arc::new(provider))),
        );

        let submission = service.submit_lead(lead_input()).await.unwrap();
        assert_eq!(submission.notification, NotificationOutcome::Failed);
        assert_eq!(sends.load(Ordering::SeqCst), 1);
        assert_eq!(service.repository().lead_count().await, 1);
    }

    #[tokio::test]
    async fn test_notification_sent_when_provider_accepts() {
        let (provider, sends) = StubProvider::new(false);
        let service = LeadService::new(
            InMemoryLeadRepository::new(),
            LeadMailer::new("ops@example.com", Some(Arc::new(provider))),
        );

        let submission = service.submit_lead(lead_input()).await.unwrap();
        assert_eq!(submission.notification, NotificationOutcome::Sent);
        assert_eq!(sends.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_newsletter_repeat_signup_is_idempotent() {
        let service = LeadService::new(InMemoryLeadRepository::new(), mailer());

        let signup = NewsletterSignup {
            email: "vip@example.com".to_string(),
        };
        service.subscribe_newsletter(signup.clone()).await.unwrap();
        service.subscribe_newsletter(signup).await.unwrap();

        assert_eq!(service.repository().newsletter_emails().await.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_requires_message() {
        let service = LeadService::new(InMemoryLeadRepository::new(), mailer());

        let result = service
            .submit_contact(ContactInquiry {
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                company: String::new(),
                budget: String::new(),
                message: String::new(),
            })
            .await;

        assert!(matches!(result, Err(LeadError::Validation(_))));
    }
}
