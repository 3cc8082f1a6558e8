//! In-memory event bus.
//!
//! Captures every published envelope so tests and the CLI can inspect what
//! the application emitted. There is no delivery to subscribers.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus for testing and headless runs.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("availability.weekly_saved"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
    reject: bool,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus whose every publish fails, for exercising error paths.
    pub fn rejecting() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    fn events(&self) -> MutexGuard<'_, Vec<EventEnvelope>> {
        // A poisoned lock only means a test thread panicked mid-push; the
        // captured list is still usable.
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // === Test Helpers ===

    /// Returns all published events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.events().clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.events()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.events()
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    /// Clears all published events (for test isolation).
    pub fn clear(&self) {
        self.events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.events().iter().any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.reject {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("event bus rejected {}", event.event_type),
            ));
        }
        tracing::trace!(event_type = %event.event_type, aggregate_id = %event.aggregate_id, "event captured");
        self.events().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, Timestamp};
    use serde_json::json;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: "WeeklyAvailability".to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
            metadata: Default::default(),
        }
    }

    #[tokio::test]
    async fn captures_published_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("availability.weekly_saved", "emp-1"))
            .await
            .unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("availability.weekly_saved"));
        assert!(!bus.has_event("availability.deleted"));
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();
        for event in [
            envelope("availability.weekly_saved", "emp-1"),
            envelope("availability.weekly_saved", "emp-2"),
            envelope("other.thing", "emp-1"),
        ] {
            bus.publish(event).await.unwrap();
        }

        assert_eq!(bus.events_of_type("availability.weekly_saved").len(), 2);
        assert_eq!(bus.events_for_aggregate("emp-1").len(), 2);
    }

    #[tokio::test]
    async fn clear_resets_capture() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("a", "1")).await.unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn rejecting_bus_fails_and_captures_nothing() {
        let bus = InMemoryEventBus::rejecting();
        assert!(bus.publish(envelope("a", "1")).await.is_err());
        assert_eq!(bus.event_count(), 0);
    }
}
