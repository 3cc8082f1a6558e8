//! Slot and day validation.
//!
//! Intervals are half-open: `[09:00, 12:00)` and `[12:00, 13:00)` touch but do
//! not conflict. All functions here are pure.

use serde::{Deserialize, Serialize};

use super::{AvailabilityError, DayAvailability, DayOfWeek, TimeSlot, WeekStart, WeeklyAvailability};
use crate::domain::foundation::SlotId;

/// A pair of slots on the same day whose intervals intersect.
///
/// `first` is the slot that starts earlier (ties keep input order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConflict {
    pub first: SlotId,
    pub second: SlotId,
}

/// Checks one slot is well-formed.
///
/// # Errors
///
/// - `InvalidRange` if either bound is missing or `end <= start`
pub fn validate_slot(day: DayOfWeek, slot: &TimeSlot) -> Result<(), AvailabilityError> {
    if slot.is_well_formed() {
        Ok(())
    } else {
        Err(AvailabilityError::InvalidRange {
            day,
            slot_id: slot.id,
        })
    }
}

/// Every intersecting pair among the well-formed slots.
///
/// Sorts by start and sweeps forward from each slot only while later slots
/// start before it ends, so the cost is O(n log n + k) for k conflicts.
pub fn find_overlaps(slots: &[TimeSlot]) -> Vec<SlotConflict> {
    let mut sorted: Vec<_> = slots
        .iter()
        .filter_map(|s| s.bounds().map(|(start, end)| (start, end, s.id)))
        .collect();
    sorted.sort_by_key(|(start, _, _)| *start);

    let mut conflicts = Vec::new();
    for (i, (_, end, id)) in sorted.iter().enumerate() {
        for (other_start, _, other_id) in &sorted[i + 1..] {
            if other_start >= end {
                break;
            }
            conflicts.push(SlotConflict {
                first: *id,
                second: *other_id,
            });
        }
    }
    conflicts
}

/// True when any two slots of the day overlap.
pub fn has_conflicts(day: &DayAvailability) -> bool {
    !find_overlaps(&day.slots).is_empty()
}

/// Validates a whole day: every slot's range first, then overlaps.
///
/// Unavailable days always pass; their slots are never saved.
pub fn validate_day(day: &DayAvailability) -> Result<(), AvailabilityError> {
    if !day.is_available {
        return Ok(());
    }
    for slot in &day.slots {
        validate_slot(day.day_of_week, slot)?;
    }
    let conflicts = find_overlaps(&day.slots);
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(AvailabilityError::OverlapConflict {
            day: day.day_of_week,
            conflicts,
        })
    }
}

/// Issues found on one day, for inline display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayIssues {
    pub invalid_slots: Vec<SlotId>,
    pub conflicts: Vec<SlotConflict>,
}

impl DayIssues {
    pub fn is_empty(&self) -> bool {
        self.invalid_slots.is_empty() && self.conflicts.is_empty()
    }

    /// Whether a particular slot should be highlighted.
    pub fn involves(&self, slot_id: &SlotId) -> bool {
        self.invalid_slots.contains(slot_id)
            || self
                .conflicts
                .iter()
                .any(|c| &c.first == slot_id || &c.second == slot_id)
    }
}

/// Every issue across a week, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub days: Vec<(DayOfWeek, DayIssues)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.days.is_empty()
    }

    pub fn issues_for(&self, day: DayOfWeek) -> Option<&DayIssues> {
        self.days.iter().find(|(d, _)| *d == day).map(|(_, issues)| issues)
    }

    /// The error `save` would report: the first failing day's range error,
    /// else its overlap error.
    pub fn first_error(&self) -> Option<AvailabilityError> {
        let (day, issues) = self.days.first()?;
        if let Some(slot_id) = issues.invalid_slots.first() {
            return Some(AvailabilityError::InvalidRange {
                day: *day,
                slot_id: *slot_id,
            });
        }
        Some(AvailabilityError::OverlapConflict {
            day: *day,
            conflicts: issues.conflicts.clone(),
        })
    }
}

/// Collects every issue in the week rather than stopping at the first.
pub fn validate_week(week: &WeeklyAvailability, week_start: WeekStart) -> ValidationReport {
    let days = week
        .iter(week_start)
        .filter(|day| day.is_available)
        .filter_map(|day| {
            let issues = DayIssues {
                invalid_slots: day
                    .slots
                    .iter()
                    .filter(|s| !s.is_well_formed())
                    .map(|s| s.id)
                    .collect(),
                conflicts: find_overlaps(&day.slots),
            };
            (!issues.is_empty()).then_some((day.day_of_week, issues))
        })
        .collect();
    ValidationReport { days }
}
