//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod availability;

pub use availability::{
    OpenAvailabilityEditorHandler, OpenAvailabilityEditorQuery, SaveWeeklyAvailabilityHandler,
    SaveWeeklyAvailabilityResult,
};
