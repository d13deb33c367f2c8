//! Leads Domain
//!
//! Append-only capture of everything the marketing site submits:
//! guestlist/table booking leads, contact and partnership inquiries,
//! hospitality-campaign inquiries, host-a-crawl inquiries, and
//! newsletter signups (idempotent on email).
//!
//! The booking-lead path is a three-step pipeline: validate, persist
//! exactly one row, then best-effort notify the operations mailbox.
//! The notification outcome is reported alongside the persisted lead
//! but never fails the submission.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{LeadError, LeadResult};
pub use models::{
    ContactInquiry, CrawlHostInquiry, CreateLead, HospitalityInquiry, Lead, LeadIntent,
    NewsletterSignup,
};
pub use postgres::PgLeadRepository;
pub use repository::{InMemoryLeadRepository, LeadRepository};
pub use service::{LeadService, LeadSubmission};
