//! Availability command and query handlers.

mod open_availability_editor;
mod save_weekly_availability;

pub use open_availability_editor::{OpenAvailabilityEditorHandler, OpenAvailabilityEditorQuery};
pub use save_weekly_availability::{SaveWeeklyAvailabilityHandler, SaveWeeklyAvailabilityResult};
