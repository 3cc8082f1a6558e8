//! One day's availability within a weekly pattern.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, TimeSlot};
use crate::domain::foundation::SlotId;

/// A day of the week together with its slots.
///
/// # Invariants
///
/// - `is_available` implies at least one slot; editor operations keep it
///   and input is normalised through [`DayAvailability::normalized`]
/// - Slots of an unavailable day are ignored when saving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DayAvailabilityDto")]
pub struct DayAvailability {
    pub day_of_week: DayOfWeek,
    pub is_available: bool,
    pub slots: Vec<TimeSlot>,
}

/// Wire form; `isAvailable` is optional for payloads from older front-ends.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayAvailabilityDto {
    day_of_week: DayOfWeek,
    #[serde(default)]
    is_available: Option<bool>,
    #[serde(default)]
    slots: Vec<TimeSlot>,
}

impl From<DayAvailabilityDto> for DayAvailability {
    fn from(dto: DayAvailabilityDto) -> Self {
        match dto.is_available {
            Some(flag) => Self {
                day_of_week: dto.day_of_week,
                is_available: flag,
                slots: dto.slots,
            }
            .normalized(),
            None => Self::with_slots(dto.day_of_week, dto.slots),
        }
    }
}

impl DayAvailability {
    /// An unavailable day with no slots.
    pub fn empty(day_of_week: DayOfWeek) -> Self {
        Self {
            day_of_week,
            is_available: false,
            slots: Vec::new(),
        }
    }

    /// A day whose availability follows from having any slots.
    pub fn with_slots(day_of_week: DayOfWeek, slots: Vec<TimeSlot>) -> Self {
        Self {
            day_of_week,
            is_available: !slots.is_empty(),
            slots,
        }
    }

    /// Clears `is_available` on a day that has no slots to offer.
    pub fn normalized(mut self) -> Self {
        if self.slots.is_empty() {
            self.is_available = false;
        }
        self
    }

    pub fn slot(&self, id: &SlotId) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    pub(crate) fn slot_mut(&mut self, id: &SlotId) -> Option<&mut TimeSlot> {
        self.slots.iter_mut().find(|s| &s.id == id)
    }

    /// Total scheduled minutes across well-formed slots.
    pub fn total_minutes(&self) -> u32 {
        self.slots.iter().map(|s| s.duration_minutes() as u32).sum()
    }
}
