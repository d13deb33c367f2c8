use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{EventError, EventResult},
    models::{CreateEvent, Event, EventFilter, UpdateEvent},
    repository::EventRepository,
};

pub struct PgEventRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, input: CreateEvent) -> EventResult<Event> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(event_id = %model.id, "Created event");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>> {
        let mut query = entity::Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(entity::Column::Category.eq(category.to_string()));
        }

        let models = query
            .order_by_asc(entity::Column::Date)
            .all(self.base.db())
            .await
            .map_err(database::StoreError::from)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateEvent) -> EventResult<Event> {
        let model = self
            .base
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))?;

        let mut event: Event = model.into();
        event.apply_update(input);

        let active_model: entity::ActiveModel = event.into();
        let updated = self.base.update(active_model).await?;

        tracing::info!(event_id = %id, "Updated event");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> EventResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(rows_affected > 0)
    }
}
