//! OpenAvailabilityEditorHandler - starts an editing session for a worker.

use std::sync::Arc;

use crate::domain::availability::{AvailabilityEditor, DayAvailability, EditorSettings};
use crate::domain::foundation::{CommandMetadata, DomainError, WorkerId};
use crate::ports::{AvailabilityRepository, EditorNotifier, EventPublisher};

use super::SaveWeeklyAvailabilityHandler;

/// Query to open the editor on a worker's stored pattern.
#[derive(Debug, Clone)]
pub struct OpenAvailabilityEditorQuery {
    pub worker_id: WorkerId,
}

/// Builds editors wired to persistence and event publishing.
pub struct OpenAvailabilityEditorHandler {
    repository: Arc<dyn AvailabilityRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    settings: EditorSettings,
}

impl OpenAvailabilityEditorHandler {
    pub fn new(
        repository: Arc<dyn AvailabilityRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        settings: EditorSettings,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            settings,
        }
    }

    /// Loads the stored week (empty if none) and returns an editor whose
    /// save port persists back for the same worker.
    pub async fn handle(
        &self,
        query: OpenAvailabilityEditorQuery,
        metadata: CommandMetadata,
        notifier: Arc<dyn EditorNotifier>,
    ) -> Result<AvailabilityEditor, DomainError> {
        let initial: Vec<DayAvailability> = self
            .repository
            .find_by_worker(&query.worker_id)
            .await?
            .map(|stored| stored.days)
            .unwrap_or_default();

        tracing::debug!(
            worker_id = %query.worker_id,
            stored_days = initial.len(),
            "opening availability editor"
        );

        let saver = Arc::new(SaveWeeklyAvailabilityHandler::new(
            self.repository.clone(),
            self.event_publisher.clone(),
            query.worker_id,
            metadata,
        ));

        Ok(AvailabilityEditor::new(initial, self.settings, saver, notifier))
    }
}
