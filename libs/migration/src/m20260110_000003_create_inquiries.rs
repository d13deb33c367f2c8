use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contact / partnership inquiries
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Contacts::Id))
                    .col(string(Contacts::Name))
                    .col(string(Contacts::Email))
                    .col(string(Contacts::CompanyBrand).default(""))
                    .col(string(Contacts::BudgetRange).default(""))
                    .col(text(Contacts::Message))
                    .col(timestamp_with_time_zone(Contacts::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Influencer hospitality campaign inquiries
        manager
            .create_table(
                Table::create()
                    .table(TableworthyLeads::Table)
                    .if_not_exists()
                    .col(pk_uuid(TableworthyLeads::Id))
                    .col(string(TableworthyLeads::Name))
                    .col(string(TableworthyLeads::Email))
                    .col(string(TableworthyLeads::Brand))
                    .col(text(TableworthyLeads::Message))
                    .col(timestamp_with_time_zone(TableworthyLeads::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Host-a-crawl inquiries
        manager
            .create_table(
                Table::create()
                    .table(CrawlHosts::Table)
                    .if_not_exists()
                    .col(pk_uuid(CrawlHosts::Id))
                    .col(string(CrawlHosts::Name))
                    .col(string(CrawlHosts::Email))
                    .col(string(CrawlHosts::City))
                    .col(text(CrawlHosts::Message))
                    .col(timestamp_with_time_zone(CrawlHosts::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawlHosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TableworthyLeads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    CompanyBrand,
    BudgetRange,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TableworthyLeads {
    Table,
    Id,
    Name,
    Email,
    Brand,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CrawlHosts {
    Table,
    Id,
    Name,
    Email,
    City,
    Message,
    CreatedAt,
}
