//! Outbound email notifications.
//!
//! Provides the [`EmailProvider`] seam, a lettre-backed SMTP provider,
//! and the [`LeadMailer`] that turns booking leads into a plain-text
//! summary for the operations mailbox. Sending is strictly best-effort:
//! a failed or unconfigured send never fails the triggering operation.

pub mod error;
pub mod mailer;
pub mod providers;

pub use error::{NotificationError, NotificationResult};
pub use mailer::{LeadMailer, LeadNotification, NotificationOutcome};
pub use providers::{EmailContent, EmailProvider, SentEmail, SmtpConfig, SmtpProvider};
