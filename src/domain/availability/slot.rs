//! Time slot value object.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;
use crate::domain::foundation::SlotId;

/// Which bound of a slot an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotField {
    StartTime,
    EndTime,
}

/// A half-open interval `[start_time, end_time)` within one day.
///
/// Either bound may be missing while the slot is being edited; well-formedness
/// (`start_time < end_time`) is checked by validation, not on mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub id: SlotId,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

impl TimeSlot {
    /// Creates a slot with a fresh id.
    pub fn new(start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            id: SlotId::new(),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// A fresh 09:00-17:00 slot.
    pub fn new_default() -> Self {
        Self::new(TimeOfDay::DEFAULT_START, TimeOfDay::DEFAULT_END)
    }

    /// Same times, new identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: SlotId::new(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Both bounds, if the slot is well-formed.
    pub fn bounds(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.bounds().is_some()
    }

    /// Half-open intersection test. Touching slots (`a.end == b.start`) do not
    /// overlap; malformed slots overlap nothing.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }

    /// Length in minutes, zero for malformed slots.
    pub fn duration_minutes(&self) -> u16 {
        self.bounds()
            .map(|(start, end)| end.minutes() - start.minutes())
            .unwrap_or(0)
    }

    pub(crate) fn set(&mut self, field: SlotField, value: Option<TimeOfDay>) {
        match field {
            SlotField::StartTime => self.start_time = value,
            SlotField::EndTime => self.end_time = value,
        }
    }
}
