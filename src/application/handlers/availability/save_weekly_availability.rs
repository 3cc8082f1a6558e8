//! SaveWeeklyAvailabilityHandler - persists a worker's weekly pattern.
//!
//! Bound to one worker and request context, it is what the editor's save
//! port points at in a running host.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::availability::{
    validate_day, DayAvailability, StoredAvailability, WeeklyAvailabilitySaved,
};
use crate::domain::foundation::{
    CommandMetadata, DomainError, EventId, SerializableDomainEvent, WorkerId,
};
use crate::ports::{AvailabilityRepository, AvailabilitySaver, EventPublisher};

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveWeeklyAvailabilityResult {
    pub stored: StoredAvailability,
    pub event: WeeklyAvailabilitySaved,
}

/// Handler for saving one worker's weekly availability.
pub struct SaveWeeklyAvailabilityHandler {
    repository: Arc<dyn AvailabilityRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    worker_id: WorkerId,
    metadata: CommandMetadata,
}

impl SaveWeeklyAvailabilityHandler {
    pub fn new(
        repository: Arc<dyn AvailabilityRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        worker_id: WorkerId,
        metadata: CommandMetadata,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            worker_id,
            metadata,
        }
    }

    pub fn worker_id(&self) -> &WorkerId {
        &self.worker_id
    }

    /// Validates and persists `days`, then publishes `WeeklyAvailabilitySaved`.
    ///
    /// Validation runs again here so callers other than the editor cannot
    /// store overlapping or inverted slots. If publishing fails the previous
    /// pattern is put back, so an `Err` never leaves the new one stored.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a day appears twice
    /// - `InvalidRange` / `OverlapConflict` if a day fails validation
    /// - `StorageError` if the repository fails
    /// - the publisher's error if the event cannot be published
    pub async fn handle(
        &self,
        days: Vec<DayAvailability>,
    ) -> Result<SaveWeeklyAvailabilityResult, DomainError> {
        // 1. Reject duplicate days
        let mut seen = HashSet::new();
        if let Some(dup) = days.iter().find(|d| !seen.insert(d.day_of_week)) {
            return Err(DomainError::validation(
                "days",
                format!("{} appears more than once", dup.day_of_week),
            )
            .with_detail("day", dup.day_of_week.name()));
        }

        // 2. Validate each day
        for day in &days {
            validate_day(day)?;
        }

        // 3. Persist, keeping what it replaces
        let previous = self.repository.find_by_worker(&self.worker_id).await?;
        let stored = StoredAvailability::new(self.worker_id.clone(), days);
        self.repository.save(&stored).await?;

        // 4. Publish event
        let available: Vec<&DayAvailability> =
            stored.days.iter().filter(|d| d.is_available).collect();
        let event = WeeklyAvailabilitySaved {
            event_id: EventId::new(),
            worker_id: self.worker_id.clone(),
            available_days: available.iter().map(|d| d.day_of_week).collect(),
            slot_count: available.iter().map(|d| d.slots.len()).sum(),
            saved_at: stored.updated_at,
        };

        let mut envelope = event
            .to_envelope()
            .with_correlation_id(self.metadata.correlation_id())
            .with_actor_id(self.metadata.actor_id.to_string());
        if let Some(source) = self.metadata.source() {
            envelope = envelope.with_source(source);
        }

        if let Err(err) = self.event_publisher.publish(envelope).await {
            self.restore(previous).await;
            return Err(err);
        }

        tracing::info!(
            worker_id = %self.worker_id,
            actor_id = %self.metadata.actor_id,
            days = event.available_days.len(),
            slots = event.slot_count,
            "weekly availability saved"
        );

        Ok(SaveWeeklyAvailabilityResult { stored, event })
    }

    async fn restore(&self, previous: Option<StoredAvailability>) {
        let restored = match previous {
            Some(previous) => self.repository.save(&previous).await,
            None => self.repository.delete(&self.worker_id).await,
        };
        match restored {
            Ok(()) => tracing::warn!(
                worker_id = %self.worker_id,
                "event publish failed; previous availability restored"
            ),
            Err(err) => tracing::error!(
                worker_id = %self.worker_id,
                error = %err,
                "event publish failed and previous availability could not be restored"
            ),
        }
    }
}

#[async_trait]
impl AvailabilitySaver for SaveWeeklyAvailabilityHandler {
    async fn save(&self, availability: Vec<DayAvailability>) -> Result<(), DomainError> {
        self.handle(availability).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAvailabilityRepository, InMemoryEventBus};
    use crate::domain::availability::{DayOfWeek, TimeOfDay, TimeSlot};
    use crate::domain::foundation::ErrorCode;
    use crate::ports::RepositoryError;

    struct FailingRepository;

    #[async_trait]
    impl AvailabilityRepository for FailingRepository {
        async fn save(&self, _: &StoredAvailability) -> Result<(), RepositoryError> {
            Err(RepositoryError::IoError("disk full".into()))
        }

        async fn find_by_worker(
            &self,
            _: &WorkerId,
        ) -> Result<Option<StoredAvailability>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, id: &WorkerId) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound(id.clone()))
        }

        async fn exists(&self, _: &WorkerId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn worker() -> WorkerId {
        WorkerId::new("emp-7").unwrap()
    }

    fn slot(start: (u8, u8), end: (u8, u8)) -> TimeSlot {
        TimeSlot::new(
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(end.0, end.1).unwrap(),
        )
    }

    fn handler_with(
        repository: Arc<dyn AvailabilityRepository>,
        bus: Arc<InMemoryEventBus>,
    ) -> SaveWeeklyAvailabilityHandler {
        let metadata = CommandMetadata::new(worker())
            .with_correlation_id("req-42")
            .with_source("editor");
        SaveWeeklyAvailabilityHandler::new(repository, bus, worker(), metadata)
    }

    #[tokio::test]
    async fn persists_and_publishes() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler_with(repo.clone(), bus.clone());

        let days = vec![
            DayAvailability::with_slots(DayOfWeek::Monday, vec![slot((9, 0), (12, 0)), slot((13, 0), (17, 0))]),
            DayAvailability::with_slots(DayOfWeek::Wednesday, vec![slot((10, 0), (14, 0))]),
        ];
        let result = handler.handle(days.clone()).await.unwrap();

        assert_eq!(result.stored.days, days);
        assert_eq!(result.event.available_days, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);
        assert_eq!(result.event.slot_count, 3);

        let stored = repo.find_by_worker(&worker()).await.unwrap().unwrap();
        assert_eq!(stored.days, days);

        let events = bus.events_of_type("availability.weekly_saved");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, "emp-7");
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("req-42"));
        assert_eq!(events[0].metadata.actor_id.as_deref(), Some("emp-7"));
        assert_eq!(events[0].metadata.source.as_deref(), Some("editor"));
    }

    #[tokio::test]
    async fn unavailable_days_do_not_count_toward_event() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler_with(repo, bus);

        let days = vec![
            DayAvailability::empty(DayOfWeek::Sunday),
            DayAvailability::with_slots(DayOfWeek::Monday, vec![slot((9, 0), (17, 0))]),
        ];
        let result = handler.handle(days).await.unwrap();
        assert_eq!(result.event.available_days, vec![DayOfWeek::Monday]);
        assert_eq!(result.stored.days.len(), 2);
    }

    #[tokio::test]
    async fn rejects_duplicate_days() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler_with(repo.clone(), bus.clone());

        let days = vec![
            DayAvailability::with_slots(DayOfWeek::Friday, vec![slot((9, 0), (10, 0))]),
            DayAvailability::with_slots(DayOfWeek::Friday, vec![slot((11, 0), (12, 0))]),
        ];
        let err = handler.handle(days).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("day"), Some(&"Friday".to_string()));
        assert_eq!(repo.count().await, 0);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn rejects_overlaps_even_without_the_editor() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler_with(repo.clone(), bus);

        let days = vec![DayAvailability::with_slots(
            DayOfWeek::Monday,
            vec![slot((9, 0), (17, 0)), slot((16, 0), (18, 0))],
        )];
        let err = handler.handle(days).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OverlapConflict);
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn repository_failure_surfaces_as_storage_error() {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = handler_with(Arc::new(FailingRepository), bus.clone());

        let err = handler.save(vec![]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn publish_failure_leaves_nothing_stored_for_new_worker() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let handler = handler_with(repo.clone(), Arc::new(InMemoryEventBus::rejecting()));

        let days = vec![DayAvailability::with_slots(DayOfWeek::Monday, vec![slot((9, 0), (17, 0))])];
        let err = handler.save(days).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_worker(&worker()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn publish_failure_restores_previous_pattern() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let previous = StoredAvailability::new(
            worker(),
            vec![DayAvailability::with_slots(DayOfWeek::Tuesday, vec![slot((8, 0), (12, 0))])],
        );
        repo.save(&previous).await.unwrap();
        let handler = handler_with(repo.clone(), Arc::new(InMemoryEventBus::rejecting()));

        let days = vec![DayAvailability::with_slots(DayOfWeek::Friday, vec![slot((13, 0), (18, 0))])];
        assert!(handler.save(days).await.is_err());

        let stored = repo.find_by_worker(&worker()).await.unwrap().unwrap();
        assert_eq!(stored.days, previous.days);
    }
}
