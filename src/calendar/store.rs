use super::models::CalendarEvent;
use crate::error::{store_error, AppResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Storage for committed calendar events
#[async_trait::async_trait]
pub trait EventStore: Send + Sync + 'static {
    /// Insert an event, replacing any event with the same id
    async fn upsert(&self, event: CalendarEvent) -> AppResult<()>;

    /// Get an event by id
    async fn get(&self, id: &str) -> AppResult<Option<CalendarEvent>>;

    /// Remove an event, failing if it does not exist
    async fn remove(&self, id: &str) -> AppResult<CalendarEvent>;

    /// List every event, ordered by date
    async fn list(&self) -> AppResult<Vec<CalendarEvent>>;

    /// Events shown on a given day
    async fn events_for_day(&self, day: NaiveDate) -> AppResult<Vec<CalendarEvent>> {
        let events = self.list().await?;
        Ok(super::events_for_day(&events, day))
    }
}

/// Transient in-memory event collection
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<String, CalendarEvent>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether the store holds no events
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn upsert(&self, event: CalendarEvent) -> AppResult<()> {
        if event.id.trim().is_empty() {
            return Err(store_error("Event id must not be empty"));
        }

        let mut events = self.events.write().await;
        let replaced = events.insert(event.id.clone(), event);
        match replaced {
            Some(previous) => info!("Updated event {}", previous.id),
            None => debug!("Stored new event, {} events in total", events.len()),
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<CalendarEvent>> {
        let events = self.events.read().await;
        Ok(events.get(id).cloned())
    }

    async fn remove(&self, id: &str) -> AppResult<CalendarEvent> {
        let mut events = self.events.write().await;
        let removed = events
            .remove(id)
            .ok_or_else(|| store_error(&format!("No event with id {}", id)))?;
        info!("Removed event {}", id);
        Ok(removed)
    }

    async fn list(&self) -> AppResult<Vec<CalendarEvent>> {
        let events = self.events.read().await;
        let mut all: Vec<CalendarEvent> = events.values().cloned().collect();
        all.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.starts_at().cmp(&b.starts_at()))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }
}
