use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Stock image used when an event is created without one
pub const DEFAULT_IMAGE: &str = "/gallery/1.jpg";
/// Placeholder ticket link for events without ticketing yet
pub const DEFAULT_TICKET_LINK: &str = "#";

/// Fixed set of event categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EventCategory {
    TourCrawl,
    MusicSession,
    Guestlist,
    Other,
}

/// A schedulable public occurrence (party, crawl stop, session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Opaque identifier, immutable once assigned
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    /// Free-text time range, e.g. "4:00 PM - 11:00 PM"
    pub time: String,
    pub venue: String,
    pub city: String,
    pub category: EventCategory,
    pub image: String,
    pub description: String,
    pub ticket_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new event
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1))]
    pub title: String,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(length(min = 1))]
    pub venue: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub category: EventCategory,
    #[serde(default)]
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub ticket_link: Option<String>,
}

/// DTO for partially updating an event; unset fields stay untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEvent {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub time: Option<String>,
    #[validate(length(min = 1))]
    pub venue: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    pub category: Option<EventCategory>,
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub ticket_link: Option<String>,
}

/// Query filters for event listings
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
}

impl Event {
    /// Create a new event from the DTO, filling defaults
    pub fn new(input: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            date: input.date,
            time: input.time,
            venue: input.venue,
            city: input.city,
            category: input.category,
            image: non_empty_or(input.image, DEFAULT_IMAGE),
            description: input.description,
            ticket_link: non_empty_or(input.ticket_link, DEFAULT_TICKET_LINK),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, leaving unset fields unchanged
    pub fn apply_update(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(venue) = update.venue {
            self.venue = venue;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(ticket_link) = update.ticket_link {
            self.ticket_link = ticket_link;
        }
        self.updated_at = Utc::now();
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Group a date-ordered event slice into (month label, events) buckets,
/// preserving order. Labels look like "March 2026".
pub fn group_by_month(events: &[Event]) -> Vec<(String, Vec<Event>)> {
    let mut groups: Vec<(String, Vec<Event>)> = Vec::new();

    for event in events {
        let label = event.date.format("%B %Y").to_string();
        match groups.last_mut() {
            Some((current, bucket)) if *current == label => bucket.push(event.clone()),
            _ => groups.push((label, vec![event.clone()])),
        }
    }

    groups
}
