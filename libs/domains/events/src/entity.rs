use crate::models::{CreateEvent, Event, EventCategory};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// SeaORM entity for the events table. Category is stored as its
/// serialized string value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub date: Date,
    pub time: String,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub ticket_link: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            date: model.date,
            time: model.time,
            venue: model.venue,
            city: model.city,
            // Unknown stored values land in Other rather than failing the read
            category: EventCategory::from_str(&model.category).unwrap_or(EventCategory::Other),
            image: model.image,
            description: model.description,
            ticket_link: model.ticket_link,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Event> for ActiveModel {
    fn from(event: Event) -> Self {
        ActiveModel {
            id: Set(event.id),
            title: Set(event.title),
            date: Set(event.date),
            time: Set(event.time),
            venue: Set(event.venue),
            city: Set(event.city),
            category: Set(event.category.to_string()),
            image: Set(event.image),
            description: Set(event.description),
            ticket_link: Set(event.ticket_link),
            created_at: Set(event.created_at.into()),
            updated_at: Set(event.updated_at.into()),
        }
    }
}

impl From<CreateEvent> for ActiveModel {
    fn from(input: CreateEvent) -> Self {
        Event::new(input).into()
    }
}
