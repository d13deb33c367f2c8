use core_config::admin::AdminConfig;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventFilter, UpdateEvent};
use crate::repository::EventRepository;

/// Service layer for event management.
///
/// Mutating operations check the shared admin secret before touching
/// the store; the listing path masks store failures with an empty list
/// so an admin panel or the public site keeps rendering during outages.
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
    admin: AdminConfig,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R, admin: AdminConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            admin,
        }
    }

    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    fn authorize(&self, password: &str) -> EventResult<()> {
        if self.admin.verify(password) {
            Ok(())
        } else {
            Err(EventError::Unauthorized)
        }
    }

    /// List all events, date ascending. Store failures degrade to an
    /// empty list (logged server-side) rather than propagating.
    pub async fn list_events(&self, filter: EventFilter) -> Vec<Event> {
        match self.repository.list(filter).await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Failed to list events, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    pub async fn create_event(&self, password: &str, input: CreateEvent) -> EventResult<Event> {
        self.authorize(password)?;
        input
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn update_event(
        &self,
        password: &str,
        id: Uuid,
        input: UpdateEvent,
    ) -> EventResult<Event> {
        self.authorize(password)?;
        input
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete an event. Deleting an id with no row is treated as
    /// success, per the underlying store semantics.
    pub async fn delete_event(&self, password: &str, id: Uuid) -> EventResult<()> {
        self.authorize(password)?;

        let removed = self.repository.delete(id).await?;
        if !removed {
            tracing::debug!(event_id = %id, "Delete matched no row");
        }
        Ok(())
    }
}

/// Public read path with an injected fallback catalog.
///
/// Returns the stored calendar when it has entries; substitutes the
/// bundled sample list when the store is empty or unreachable.
#[derive(Clone)]
pub struct PublicEventCatalog<R: EventRepository> {
    repository: Arc<R>,
    fallback: Arc<Vec<Event>>,
}

impl<R: EventRepository> PublicEventCatalog<R> {
    pub fn new(repository: Arc<R>, fallback: Vec<Event>) -> Self {
        Self {
            repository,
            fallback: Arc::new(fallback),
        }
    }

    pub async fn list_public(&self, filter: EventFilter) -> Vec<Event> {
        let category = filter.category;

        let stored = match self.repository.list(filter).await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Public listing falling back to bundled events: {}", e);
                Vec::new()
            }
        };

        if !stored.is_empty() {
            return stored;
        }

        self.fallback
            .iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .cloned()
            .collect()
    }
}
