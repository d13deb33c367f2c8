pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_events;
mod m20260110_000002_create_leads;
mod m20260110_000003_create_inquiries;
mod m20260110_000004_create_newsletter;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_events::Migration),
            Box::new(m20260110_000002_create_leads::Migration),
            Box::new(m20260110_000003_create_inquiries::Migration),
            Box::new(m20260110_000004_create_newsletter::Migration),
        ]
    }
}
