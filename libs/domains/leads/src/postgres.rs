use async_trait::async_trait;
use database::{BaseRepository, StoreError};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    error::LeadResult,
    models::{ContactInquiry, CrawlHostInquiry, HospitalityInquiry, Lead},
    repository::LeadRepository,
};

pub struct PgLeadRepository {
    base: BaseRepository<entity::lead::Entity>,
}

impl PgLeadRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl LeadRepository for PgLeadRepository {
    async fn insert_lead(&self, lead: Lead) -> LeadResult<Lead> {
        let active_model: entity::lead::ActiveModel = lead.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(lead_id = %model.id, intent = %model.intent, "Captured lead");
        Ok(model.into())
    }

    async fn insert_contact(&self, input: ContactInquiry) -> LeadResult<()> {
        let active_model: entity::contact::ActiveModel = input.into();
        active_model
            .insert(self.base.db())
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn insert_hospitality(&self, input: HospitalityInquiry) -> LeadResult<()> {
        let active_model: entity::tableworthy::ActiveModel = input.into();
        active_model
            .insert(self.base.db())
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn insert_crawl_host(&self, input: CrawlHostInquiry) -> LeadResult<()> {
        let active_model: entity::crawl_host::ActiveModel = input.into();
        active_model
            .insert(self.base.db())
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn upsert_newsletter(&self, email: String) -> LeadResult<()> {
        // Unique index on email; a repeat signup is silently absorbed
        entity::newsletter::Entity::insert(entity::newsletter::ActiveModel::for_email(email))
            .on_conflict(
                OnConflict::column(entity::newsletter::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.base.db())
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }
}
