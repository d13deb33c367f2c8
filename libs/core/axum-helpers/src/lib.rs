//! Shared Axum plumbing for the Afterdark services.
//!
//! Provides the standard error response shape, a validating JSON
//! extractor, audit logging for admin mutations, health endpoints, and
//! server bootstrap with graceful shutdown.

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

pub use audit::{AuditEvent, AuditOutcome};
pub use errors::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
pub use health::health_router;
pub use server::{create_app, create_router};
