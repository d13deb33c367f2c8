use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Newsletter::Table)
                    .if_not_exists()
                    .col(pk_uuid(Newsletter::Id))
                    .col(string(Newsletter::Email))
                    .col(timestamp_with_time_zone(Newsletter::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Re-subscribing with the same email upserts instead of duplicating
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_newsletter_email")
                    .table(Newsletter::Table)
                    .col(Newsletter::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Newsletter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Newsletter {
    Table,
    Id,
    Email,
    CreatedAt,
}
