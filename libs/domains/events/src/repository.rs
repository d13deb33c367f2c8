use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventFilter, UpdateEvent};

/// Repository trait for Event persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Create a new event; returns the persisted record with its id
    async fn create(&self, input: CreateEvent) -> EventResult<Event>;

    /// Get an event by id
    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// List events ordered by date ascending
    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>>;

    /// Apply a partial update; NotFound if the id matches no record
    async fn update(&self, id: Uuid, input: UpdateEvent) -> EventResult<Event>;

    /// Delete by id; false when no row existed (not an error)
    async fn delete(&self, id: Uuid) -> EventResult<bool>;
}

/// In-memory implementation for development and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, input: CreateEvent) -> EventResult<Event> {
        let mut events = self.events.write().await;
        let event = Event::new(input);
        events.insert(event.id, event.clone());

        tracing::info!(event_id = %event.id, "Created event");
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list(&self, filter: EventFilter) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;

        let mut result: Vec<Event> = events
            .values()
            .filter(|e| match filter.category {
                Some(category) => e.category == category,
                None => true,
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateEvent) -> EventResult<Event> {
        let mut events = self.events.write().await;
        let event = events.get_mut(&id).ok_or(EventError::NotFound(id))?;

        event.apply_update(input);
        let updated = event.clone();

        tracing::info!(event_id = %id, "Updated event");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> EventResult<bool> {
        let mut events = self.events.write().await;

        if events.remove(&id).is_some() {
            tracing::info!(event_id = %id, "Deleted event");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
