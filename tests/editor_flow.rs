//! Integration tests for the availability editing flow.
//!
//! These tests drive the editor the way a scheduling front-end would:
//! 1. Open the editor on a worker's stored pattern
//! 2. Edit slots, copy/paste days, toggle availability
//! 3. Save through the application handler into a repository
//! 4. Check the stored pattern and the published event
//!
//! Uses in-memory adapters so no external services are needed.

use std::sync::Arc;

use availability_editor::adapters::{
    InMemoryAvailabilityRepository, InMemoryEventBus, RecordingNotifier,
};
use availability_editor::application::{OpenAvailabilityEditorHandler, OpenAvailabilityEditorQuery};
use availability_editor::domain::availability::{
    AvailabilityEditor, AvailabilityError, DayAvailability, DayOfWeek, EditorNotice,
    EditorSettings, EditorStatus, SavePayload, SlotField, StoredAvailability, TimeOfDay, TimeSlot,
    WeekStart, WeeklyAvailabilitySaved,
};
use availability_editor::domain::foundation::{CommandMetadata, WorkerId};
use availability_editor::ports::AvailabilityRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    repo: Arc<InMemoryAvailabilityRepository>,
    bus: Arc<InMemoryEventBus>,
    notifier: Arc<RecordingNotifier>,
    handler: OpenAvailabilityEditorHandler,
}

impl Harness {
    fn new(settings: EditorSettings) -> Self {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = OpenAvailabilityEditorHandler::new(repo.clone(), bus.clone(), settings);
        Self {
            repo,
            bus,
            notifier: Arc::new(RecordingNotifier::new()),
            handler,
        }
    }

    async fn open(&self, worker: &WorkerId) -> AvailabilityEditor {
        self.handler
            .handle(
                OpenAvailabilityEditorQuery {
                    worker_id: worker.clone(),
                },
                CommandMetadata::new(worker.clone()).with_correlation_id("corr-1"),
                self.notifier.clone(),
            )
            .await
            .expect("open editor")
    }
}

fn worker() -> WorkerId {
    WorkerId::new("emp-100").unwrap()
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn build_week_by_copying_monday_then_save() {
    let harness = Harness::new(EditorSettings::default());
    let mut editor = harness.open(&worker()).await;

    // Monday: 08:00-12:00 and 13:00-16:00
    let morning = editor.add_slot(DayOfWeek::Monday).unwrap();
    editor
        .update_slot_text(DayOfWeek::Monday, morning, SlotField::StartTime, "08:00")
        .unwrap();
    editor
        .update_slot_text(DayOfWeek::Monday, morning, SlotField::EndTime, "12:00")
        .unwrap();
    let afternoon = editor.add_slot(DayOfWeek::Monday).unwrap();
    editor
        .update_slot_text(DayOfWeek::Monday, afternoon, SlotField::StartTime, "13:00")
        .unwrap();
    editor
        .update_slot_text(DayOfWeek::Monday, afternoon, SlotField::EndTime, "16:00")
        .unwrap();

    // Same pattern Tuesday to Friday
    assert!(editor.copy_day(DayOfWeek::Monday).unwrap());
    for day in [
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ] {
        assert!(editor.paste_day(day).unwrap());
    }

    assert!(editor.validation_report().is_valid());
    let payload = editor.save().await.unwrap();
    assert_eq!(payload.len(), 5);
    assert_eq!(editor.status(), EditorStatus::Saved);

    let stored = harness.repo.find_by_worker(&worker()).await.unwrap().unwrap();
    assert_eq!(stored.days, payload);
    assert_eq!(stored.to_week().slot_count(), 10);

    let events = harness.bus.events_of_type("availability.weekly_saved");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("corr-1"));
    let event: WeeklyAvailabilitySaved = events[0].payload_as().unwrap();
    assert_eq!(event.slot_count, 10);
    assert_eq!(event.available_days.first(), Some(&DayOfWeek::Monday));

    assert_eq!(
        harness.notifier.last_notice(),
        Some(EditorNotice::Saved { day_count: 5 })
    );
}

#[tokio::test]
async fn fixing_an_overlap_unblocks_save() {
    let harness = Harness::new(EditorSettings::default());
    let mut editor = harness.open(&worker()).await;

    editor.add_slot(DayOfWeek::Wednesday).unwrap();
    let late = editor.add_slot(DayOfWeek::Wednesday).unwrap();
    editor
        .update_slot(DayOfWeek::Wednesday, late, SlotField::StartTime, Some(t("16:00")))
        .unwrap();
    editor
        .update_slot(DayOfWeek::Wednesday, late, SlotField::EndTime, Some(t("18:00")))
        .unwrap();

    let err = editor.save().await.unwrap_err();
    assert!(matches!(
        err,
        AvailabilityError::OverlapConflict {
            day: DayOfWeek::Wednesday,
            ..
        }
    ));
    assert!(!harness.repo.exists(&worker()).await.unwrap());
    let issues = editor.validation_report();
    assert!(issues
        .issues_for(DayOfWeek::Wednesday)
        .unwrap()
        .involves(&late));

    // Touching is fine: move the second slot to start at 17:00.
    editor
        .update_slot(DayOfWeek::Wednesday, late, SlotField::StartTime, Some(t("17:00")))
        .unwrap();
    editor.save().await.unwrap();

    assert!(harness.repo.exists(&worker()).await.unwrap());
    assert!(matches!(
        harness.notifier.notices().as_slice(),
        [
            EditorNotice::ValidationFailed {
                day: DayOfWeek::Wednesday,
                ..
            },
            EditorNotice::Saved { .. }
        ]
    ));
}

#[tokio::test]
async fn reopening_round_trips_stored_pattern() {
    let harness = Harness::new(EditorSettings::default());
    let saturday = DayAvailability::with_slots(
        DayOfWeek::Saturday,
        vec![TimeSlot::new(t("10:00"), t("14:00"))],
    );
    harness
        .repo
        .save(&StoredAvailability::new(worker(), vec![saturday.clone()]))
        .await
        .unwrap();

    let mut editor = harness.open(&worker()).await;
    assert!(!editor.is_dirty());
    let payload = editor.save().await.unwrap();

    assert_eq!(payload, vec![saturday]);
}

#[tokio::test]
async fn full_week_payload_is_stored_in_display_order() {
    let settings = EditorSettings {
        week_start: WeekStart::Sunday,
        save_payload: SavePayload::FullWeek,
        ..EditorSettings::default()
    };
    let harness = Harness::new(settings);
    let mut editor = harness.open(&worker()).await;
    editor.toggle_day(DayOfWeek::Friday).unwrap();

    editor.save().await.unwrap();

    let stored = harness.repo.find_by_worker(&worker()).await.unwrap().unwrap();
    let order: Vec<_> = stored.days.iter().map(|d| d.day_of_week).collect();
    assert_eq!(order, WeekStart::Sunday.days().to_vec());
    assert_eq!(stored.days[5].slots.len(), 1);
}

#[tokio::test]
async fn cancel_leaves_storage_untouched() {
    let harness = Harness::new(EditorSettings::default());
    let mut editor = harness.open(&worker()).await;
    editor.add_slot(DayOfWeek::Monday).unwrap();

    editor.cancel().unwrap();

    assert_eq!(harness.notifier.cancel_count(), 1);
    assert_eq!(harness.repo.count().await, 0);
    assert_eq!(harness.bus.event_count(), 0);
    assert!(matches!(
        editor.toggle_day(DayOfWeek::Monday),
        Err(AvailabilityError::EditorClosed)
    ));
}
