use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_uuid(Events::Id))
                    .col(string(Events::Title))
                    .col(date(Events::Date))
                    .col(string(Events::Time))
                    .col(string(Events::Venue))
                    .col(string(Events::City))
                    // Category stored as its serialized string value
                    .col(string(Events::Category))
                    .col(string(Events::Image))
                    .col(text(Events::Description))
                    .col(string(Events::TicketLink))
                    .col(timestamp_with_time_zone(Events::CreatedAt))
                    .col(timestamp_with_time_zone(Events::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Listings are always ordered by date ascending
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_date")
                    .table(Events::Table)
                    .col(Events::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Date,
    Time,
    Venue,
    City,
    Category,
    Image,
    Description,
    TicketLink,
    CreatedAt,
    UpdatedAt,
}
