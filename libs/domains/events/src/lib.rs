//! Events Domain
//!
//! CRUD over the public event calendar (crawls, music sessions,
//! guestlist nights) plus the public read path with its bundled
//! fallback catalog.
//!
//! Layering follows the usual shape: handlers → service → repository
//! (trait with in-memory and Postgres implementations) → models. All
//! mutating operations are gated on the shared admin secret before any
//! store access.

pub mod entity;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{EventError, EventResult};
pub use models::{CreateEvent, Event, EventCategory, EventFilter, UpdateEvent};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::{EventService, PublicEventCatalog};
