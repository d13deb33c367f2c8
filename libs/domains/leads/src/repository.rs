use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::LeadResult;
use crate::models::{ContactInquiry, CrawlHostInquiry, HospitalityInquiry, Lead};

/// Repository trait for the submission tables. Everything here is
/// append-only; nothing edits or lists what was captured.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persist a booking lead; returns the stored record
    async fn insert_lead(&self, lead: Lead) -> LeadResult<Lead>;

    /// Persist a contact / partnership inquiry
    async fn insert_contact(&self, input: ContactInquiry) -> LeadResult<()>;

    /// Persist a hospitality-campaign inquiry
    async fn insert_hospitality(&self, input: HospitalityInquiry) -> LeadResult<()>;

    /// Persist a host-a-crawl inquiry
    async fn insert_crawl_host(&self, input: CrawlHostInquiry) -> LeadResult<()>;

    /// Subscribe an email; repeat signups are a no-op, never an error
    async fn upsert_newsletter(&self, email: String) -> LeadResult<()>;
}

/// In-memory implementation for development and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<Uuid, Lead>>>,
    contacts: Arc<RwLock<Vec<ContactInquiry>>>,
    hospitality: Arc<RwLock<Vec<HospitalityInquiry>>>,
    crawl_hosts: Arc<RwLock<Vec<CrawlHostInquiry>>>,
    newsletter: Arc<RwLock<Vec<String>>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lead_count(&self) -> usize {
        self.leads.read().await.len()
    }

    pub async fn newsletter_emails(&self) -> Vec<String> {
        self.newsletter.read().await.clone()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn insert_lead(&self, lead: Lead) -> LeadResult<Lead> {
        let mut leads = self.leads.write().await;
        leads.insert(lead.id, lead.clone());

        tracing::info!(lead_id = %lead.id, intent = %lead.intent, "Captured lead");
        Ok(lead)
    }

    async fn insert_contact(&self, input: ContactInquiry) -> LeadResult<()> {
        self.contacts.write().await.push(input);
        Ok(())
    }

    async fn insert_hospitality(&self, input: HospitalityInquiry) -> LeadResult<()> {
        self.hospitality.write().await.push(input);
        Ok(())
    }

    async fn insert_crawl_host(&self, input: CrawlHostInquiry) -> LeadResult<()> {
        self.crawl_hosts.write().await.push(input);
        Ok(())
    }

    async fn upsert_newsletter(&self, email: String) -> LeadResult<()> {
        let mut newsletter = self.newsletter.write().await;
        if !newsletter.contains(&email) {
            newsletter.push(email);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateLead, LeadIntent};

    fn lead() -> Lead {
        Lead::new(CreateLead {
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
        })
    }

    #[tokio::test]
    async fn test_insert_lead_persists_one_row() {
        let repo = InMemoryLeadRepository::new();
        let stored = repo.insert_lead(lead()).await.unwrap();

        assert_eq!(repo.lead_count().await, 1);
        assert_eq!(stored.status, "new");
    }

    #[tokio::test]
    async fn test_newsletter_upsert_is_idempotent() {
        let repo = InMemoryLeadRepository::new();
        repo.upsert_newsletter("vip@example.com".to_string())
            .await
            .unwrap();
        repo.upsert_newsletter("vip@example.com".to_string())
            .await
            .unwrap();

        assert_eq!(repo.newsletter_emails().await.len(), 1);
    }
}
