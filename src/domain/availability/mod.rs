//! Availability domain module.
//!
//! A worker's recurring weekly availability: for each day of the week, zero
//! or more time slots during which they can be scheduled. The
//! [`AvailabilityEditor`] edits a full week in memory and hands validated
//! data to an injected save port.
//!
//! # Events
//!
//! - `WeeklyAvailabilitySaved` - Published when a weekly pattern is persisted

mod day;
mod editor;
mod errors;
mod events;
mod slot;
mod time;
mod validation;
mod week;
mod weekday;

pub use day::DayAvailability;
pub use editor::{
    AvailabilityEditor, Clipboard, ClipboardPolicy, EditorNotice, EditorSettings, EditorStatus,
    SavePayload,
};
pub use errors::AvailabilityError;
pub use events::WeeklyAvailabilitySaved;
pub use slot::{SlotField, TimeSlot};
pub use time::TimeOfDay;
pub use validation::{
    find_overlaps, has_conflicts, validate_day, validate_slot, validate_week, DayIssues,
    SlotConflict, ValidationReport,
};
pub use week::{StoredAvailability, WeeklyAvailability};
pub use weekday::{DayOfWeek, WeekStart};
