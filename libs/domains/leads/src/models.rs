use chrono::{DateTime, Utc};
use domain_notifications::LeadNotification;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Source tag applied when a booking lead arrives without one
pub const DEFAULT_LEAD_SOURCE: &str = "scottsdale-guestlist";

/// What the lead is asking for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeadIntent {
    Guestlist,
    Table,
}

/// A guestlist/table booking inquiry captured from a public form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub venue: String,
    pub date: String,
    pub party_size: i32,
    pub intent: LeadIntent,
    pub budget_range: String,
    pub arrival_window: String,
    pub notes: String,
    pub source_page: String,
    /// Downstream status tracking starts at "new"; never mutated here
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Booking lead submission payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLead {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(length(min = 7))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub venue: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(range(min = 1))]
    pub party_size: i32,
    pub intent: LeadIntent,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub arrival_window: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub source_page: String,
}

/// Contact / partnership inquiry
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactInquiry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub budget: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Influencer-hospitality campaign inquiry
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HospitalityInquiry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub brand: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Host-a-crawl inquiry
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CrawlHostInquiry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Newsletter signup; re-subscribing the same email upserts
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewsletterSignup {
    #[validate(email)]
    pub email: String,
}

impl Lead {
    /// Build a persistable lead from the submission, filling defaults
    pub fn new(input: CreateLead) -> Self {
        let source_page = if input.source_page.is_empty() {
            DEFAULT_LEAD_SOURCE.to_string()
        } else {
            input.source_page
        };

        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            venue: input.venue,
            date: input.date,
            party_size: input.party_size,
            intent: input.intent,
            budget_range: input.budget_range,
            arrival_window: input.arrival_window,
            notes: input.notes,
            source_page,
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl From<&Lead> for LeadNotification {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            venue: lead.venue.clone(),
            date: lead.date.clone(),
            party_size: lead.party_size,
            intent: lead.intent.to_string(),
            budget_range: lead.budget_range.clone(),
            arrival_window: lead.arrival_window.clone(),
            notes: lead.notes.clone(),
            source_page: lead.source_page.clone(),
        }
    }
}
