mod config;
mod connector;
mod repository;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, connect_with_retry, run_migrations};
pub use repository::BaseRepository;

// Re-export so app crates don't need a direct sea-orm dependency for the handle type
pub use sea_orm::DatabaseConnection;
