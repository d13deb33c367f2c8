//! PostgreSQL gateway for the Afterdark services.
//!
//! Provides the SeaORM connector (with startup retry), a generic CRUD
//! helper, and [`StoreError`] — the single boundary where provider
//! errors are translated into the application's error taxonomy. Domain
//! crates match on `StoreError` kinds and never inspect provider error
//! text themselves.

pub mod error;
pub mod postgres;

pub use error::{StoreError, StoreResult};
pub use postgres::BaseRepository;
