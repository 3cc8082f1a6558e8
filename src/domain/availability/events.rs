//! Availability domain events.

use serde::{Deserialize, Serialize};

use super::DayOfWeek;
use crate::domain::foundation::{domain_event, EventId, Timestamp, WorkerId};

/// Published when a worker's weekly pattern has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAvailabilitySaved {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Whose pattern changed.
    pub worker_id: WorkerId,

    /// Days marked available, in the order they were saved.
    pub available_days: Vec<DayOfWeek>,

    /// Total slots across those days.
    pub slot_count: usize,

    pub saved_at: Timestamp,
}

domain_event!(
    WeeklyAvailabilitySaved,
    event_type = "availability.weekly_saved",
    aggregate_id = worker_id,
    aggregate_type = "WeeklyAvailability",
    occurred_at = saved_at,
    event_id = event_id
);
