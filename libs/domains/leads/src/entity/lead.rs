use crate::models::{Lead, LeadIntent};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// SeaORM entity for the leads table. Intent is stored as its
/// serialized string value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub venue: String,
    pub date: String,
    pub party_size: i32,
    pub intent: String,
    pub budget_range: String,
    pub arrival_window: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub source_page: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Lead {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            venue: model.venue,
            date: model.date,
            party_size: model.party_size,
            // Unknown stored values land in Guestlist rather than failing the read
            intent: LeadIntent::from_str(&model.intent).unwrap_or(LeadIntent::Guestlist),
            budget_range: model.budget_range,
            arrival_window: model.arrival_window,
            notes: model.notes,
            source_page: model.source_page,
            status: model.status,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Lead> for ActiveModel {
    fn from(lead: Lead) -> Self {
        ActiveModel {
            id: Set(lead.id),
            name: Set(lead.name),
            email: Set(lead.email),
            phone: Set(lead.phone),
            venue: Set(lead.venue),
            date: Set(lead.date),
            party_size: Set(lead.party_size),
            intent: Set(lead.intent.to_string()),
            budget_range: Set(lead.budget_range),
            arrival_window: Set(lead.arrival_window),
            notes: Set(lead.notes),
            source_page: Set(lead.source_page),
            status: Set(lead.status),
            created_at: Set(lead.created_at.into()),
        }
    }
}
