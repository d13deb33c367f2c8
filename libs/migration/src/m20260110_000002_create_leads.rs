use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(pk_uuid(Leads::Id))
                    .col(string(Leads::Name))
                    .col(string(Leads::Email))
                    .col(string(Leads::Phone))
                    .col(string(Leads::Venue))
                    .col(string(Leads::Date))
                    .col(integer(Leads::PartySize))
                    .col(string(Leads::Intent))
                    .col(string(Leads::BudgetRange).default(""))
                    .col(string(Leads::ArrivalWindow).default(""))
                    .col(text(Leads::Notes).default(""))
                    .col(string(Leads::SourcePage).default(""))
                    .col(string(Leads::Status).default("new"))
                    .col(timestamp_with_time_zone(Leads::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Venue,
    Date,
    PartySize,
    Intent,
    BudgetRange,
    ArrivalWindow,
    Notes,
    SourcePage,
    Status,
    CreatedAt,
}
