//! Availability editor - the in-memory editing session for one weekly pattern.
//!
//! The editor owns a full seven-day week plus an optional clipboard. Every
//! mutation is synchronous; only [`AvailabilityEditor::save`] awaits, and it
//! takes `&mut self`, so a second save cannot start while one is in flight.
//!
//! Persistence and user-facing notices are injected as ports
//! ([`AvailabilitySaver`], [`EditorNotifier`]) so the editor has no ambient
//! dependencies.
//!
//! # Lifecycle
//!
//! ```text
//! Editing ──save()──> Saving ──ok──> Saved
//!    │                  │
//!    │                  └──err──> Editing
//!    └──cancel()──> Cancelled
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::validation::{validate_day, validate_week, ValidationReport};
use super::{
    AvailabilityError, DayAvailability, DayOfWeek, SlotField, TimeOfDay, TimeSlot, WeekStart,
    WeeklyAvailability,
};
use crate::domain::foundation::{SlotId, StateMachine};
use crate::ports::{AvailabilitySaver, EditorNotifier};

/// What happens to the clipboard after a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardPolicy {
    /// Stays set so one day can be pasted onto several others.
    #[default]
    Persistent,
    /// Cleared after the first successful paste.
    ClearAfterPaste,
}

/// Which days are handed to the save port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePayload {
    /// Only days marked available.
    #[default]
    AvailableOnly,
    /// All seven days; unavailable days are sent without slots.
    FullWeek,
}

/// Tunables for an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    pub week_start: WeekStart,
    pub default_start: TimeOfDay,
    pub default_end: TimeOfDay,
    pub clipboard_policy: ClipboardPolicy,
    pub save_payload: SavePayload,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            default_start: TimeOfDay::DEFAULT_START,
            default_end: TimeOfDay::DEFAULT_END,
            clipboard_policy: ClipboardPolicy::default(),
            save_payload: SavePayload::default(),
        }
    }
}

/// Editor lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorStatus {
    Editing,
    Saving,
    Saved,
    Cancelled,
}

impl StateMachine for EditorStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EditorStatus::*;
        matches!(
            (self, target),
            (Editing, Saving) | (Editing, Cancelled) | (Saving, Editing) | (Saving, Saved)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EditorStatus::*;
        match self {
            Editing => vec![Saving, Cancelled],
            Saving => vec![Editing, Saved],
            Saved | Cancelled => vec![],
        }
    }
}

/// User-facing messages the editor asks its notifier to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorNotice {
    /// Save was blocked; names the first offending day.
    ValidationFailed { day: DayOfWeek, message: String },
    /// The save port rejected the payload; edits are kept.
    SaveFailed { message: String },
    Saved { day_count: usize },
}

/// A snapshot of one day's slots, ready to paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    pub source: DayOfWeek,
    pub slots: Vec<TimeSlot>,
}

/// Editing session for one worker's weekly availability.
pub struct AvailabilityEditor {
    initial: WeeklyAvailability,
    week: WeeklyAvailability,
    clipboard: Option<Clipboard>,
    status: EditorStatus,
    settings: EditorSettings,
    saver: Arc<dyn AvailabilitySaver>,
    notifier: Arc<dyn EditorNotifier>,
}

impl AvailabilityEditor {
    /// Opens an editor seeded from `initial`, merged by day of week.
    pub fn new(
        initial: impl IntoIterator<Item = DayAvailability>,
        settings: EditorSettings,
        saver: Arc<dyn AvailabilitySaver>,
        notifier: Arc<dyn EditorNotifier>,
    ) -> Self {
        let week = WeeklyAvailability::from_days(initial);
        Self {
            initial: week.clone(),
            week,
            clipboard: None,
            status: EditorStatus::Editing,
            settings,
            saver,
            notifier,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn week(&self) -> &WeeklyAvailability {
        &self.week
    }

    pub fn day(&self, day: DayOfWeek) -> &DayAvailability {
        self.week.day(day)
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub fn status(&self) -> EditorStatus {
        self.status
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Whether the week differs from what the editor was opened with.
    pub fn is_dirty(&self) -> bool {
        self.week != self.initial
    }

    /// Every issue in the week, for inline highlighting.
    pub fn validation_report(&self) -> ValidationReport {
        validate_week(&self.week, self.settings.week_start)
    }

    /// The days `save` would hand to the save port right now.
    pub fn payload(&self) -> Vec<DayAvailability> {
        let days = self.week.iter(self.settings.week_start);
        match self.settings.save_payload {
            SavePayload::AvailableOnly => days.filter(|d| d.is_available).cloned().collect(),
            SavePayload::FullWeek => days
                .map(|d| {
                    if d.is_available {
                        d.clone()
                    } else {
                        DayAvailability::empty(d.day_of_week)
                    }
                })
                .collect(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a default slot and marks the day available.
    pub fn add_slot(&mut self, day: DayOfWeek) -> Result<SlotId, AvailabilityError> {
        self.ensure_open()?;
        let slot = self.default_slot();
        let id = slot.id;

        let entry = self.week.day_mut(day);
        entry.slots.push(slot);
        entry.is_available = true;

        tracing::debug!(%day, slot_id = %id, "slot added");
        Ok(id)
    }

    /// Removes a slot. Returns `false` if it was not on that day.
    ///
    /// Removing the last slot marks the day unavailable.
    pub fn remove_slot(&mut self, day: DayOfWeek, slot_id: SlotId) -> Result<bool, AvailabilityError> {
        self.ensure_open()?;
        let entry = self.week.day_mut(day);
        let before = entry.slots.len();
        entry.slots.retain(|s| s.id != slot_id);
        let removed = entry.slots.len() != before;

        if removed && entry.slots.is_empty() {
            entry.is_available = false;
        }
        tracing::debug!(%day, %slot_id, removed, "slot removal");
        Ok(removed)
    }

    /// Sets one bound of a slot. `None` clears it. Not validated until save.
    pub fn update_slot(
        &mut self,
        day: DayOfWeek,
        slot_id: SlotId,
        field: SlotField,
        value: Option<TimeOfDay>,
    ) -> Result<bool, AvailabilityError> {
        self.ensure_open()?;
        match self.week.day_mut(day).slot_mut(&slot_id) {
            Some(slot) => {
                slot.set(field, value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Like [`update_slot`](Self::update_slot) but takes form text.
    ///
    /// Empty text clears the bound; anything else must parse as `H:MM`/`HH:MM`.
    pub fn update_slot_text(
        &mut self,
        day: DayOfWeek,
        slot_id: SlotId,
        field: SlotField,
        text: &str,
    ) -> Result<bool, AvailabilityError> {
        let value = match text.trim() {
            "" => None,
            t => Some(t.parse::<TimeOfDay>()?),
        };
        self.update_slot(day, slot_id, field, value)
    }

    /// Flips availability. Enabling an empty day seeds one default slot.
    ///
    /// Returns the new availability.
    pub fn toggle_day(&mut self, day: DayOfWeek) -> Result<bool, AvailabilityError> {
        self.ensure_open()?;
        let slot = self.default_slot();
        let entry = self.week.day_mut(day);
        entry.is_available = !entry.is_available;
        if entry.is_available && entry.slots.is_empty() {
            entry.slots.push(slot);
        }
        tracing::debug!(%day, available = entry.is_available, "day toggled");
        Ok(entry.is_available)
    }

    /// Snapshots a day's slots into the clipboard, including the slots an
    /// unavailable day still holds.
    ///
    /// Returns `false`, leaving the clipboard untouched, if the day has
    /// no slots.
    pub fn copy_day(&mut self, day: DayOfWeek) -> Result<bool, AvailabilityError> {
        self.ensure_open()?;
        let entry = self.week.day(day);
        if entry.slots.is_empty() {
            return Ok(false);
        }
        self.clipboard = Some(Clipboard {
            source: day,
            slots: entry.slots.clone(),
        });
        tracing::debug!(%day, slots = entry.slots.len(), "day copied");
        Ok(true)
    }

    /// Replaces `target`'s slots with fresh-id copies of the clipboard.
    ///
    /// Returns `false` when the clipboard is empty.
    pub fn paste_day(&mut self, target: DayOfWeek) -> Result<bool, AvailabilityError> {
        self.ensure_open()?;
        let Some(clipboard) = self.clipboard.as_ref() else {
            return Ok(false);
        };
        let source = clipboard.source;
        let slots: Vec<TimeSlot> = clipboard.slots.iter().map(TimeSlot::duplicate).collect();

        let entry = self.week.day_mut(target);
        entry.is_available = !slots.is_empty();
        entry.slots = slots;

        if self.settings.clipboard_policy == ClipboardPolicy::ClearAfterPaste {
            self.clipboard = None;
        }
        tracing::debug!(%source, %target, "day pasted");
        Ok(true)
    }

    /// Removes every slot and marks the day unavailable.
    pub fn clear_day(&mut self, day: DayOfWeek) -> Result<(), AvailabilityError> {
        self.ensure_open()?;
        let entry = self.week.day_mut(day);
        entry.slots.clear();
        entry.is_available = false;
        tracing::debug!(%day, "day cleared");
        Ok(())
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save / cancel
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates, then hands the payload to the save port.
    ///
    /// Validation walks days in display order and stops at the first invalid
    /// day. On any failure the in-memory week is left intact so the user can
    /// fix it and try again; there are no automatic retries.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` / `OverlapConflict` if a day fails validation
    /// - `SaveFailed` if the save port rejects the payload
    /// - `EditorClosed` if already saved or cancelled
    pub async fn save(&mut self) -> Result<Vec<DayAvailability>, AvailabilityError> {
        self.ensure_open()?;

        if let Err(err) = self.validate_for_save() {
            tracing::warn!(day = ?err.day(), error = %err, "save blocked by validation");
            if let Some(day) = err.day() {
                self.notifier.notify(EditorNotice::ValidationFailed {
                    day,
                    message: err.to_string(),
                });
            }
            return Err(err);
        }

        let payload = self.payload();
        self.status = self.status.transition_to(EditorStatus::Saving)?;

        match self.saver.save(payload.clone()).await {
            Ok(()) => {
                self.status = self.status.transition_to(EditorStatus::Saved)?;
                tracing::info!(days = payload.len(), "availability saved");
                self.notifier.notify(EditorNotice::Saved {
                    day_count: payload.len(),
                });
                Ok(payload)
            }
            Err(err) => {
                self.status = self.status.transition_to(EditorStatus::Editing)?;
                tracing::error!(error = %err, "availability save failed");
                self.notifier.notify(EditorNotice::SaveFailed {
                    message: "Failed to save availability. Please try again.".to_string(),
                });
                Err(AvailabilityError::SaveFailed(err.to_string()))
            }
        }
    }

    /// Discards all edits and tells the notifier the session was cancelled.
    pub fn cancel(&mut self) -> Result<(), AvailabilityError> {
        self.ensure_open()?;
        self.status = self.status.transition_to(EditorStatus::Cancelled)?;
        self.week = WeeklyAvailability::empty();
        self.clipboard = None;
        tracing::debug!("availability editing cancelled");
        self.notifier.cancelled();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), AvailabilityError> {
        match self.status {
            EditorStatus::Editing => Ok(()),
            _ => Err(AvailabilityError::EditorClosed),
        }
    }

    fn default_slot(&self) -> TimeSlot {
        TimeSlot::new(self.settings.default_start, self.settings.default_end)
    }

    fn validate_for_save(&self) -> Result<(), AvailabilityError> {
        self.week
            .iter(self.settings.week_start)
            .try_for_each(validate_day)
    }
}
