//! The seven-day recurring pattern and its persisted form.

use serde::{Deserialize, Serialize};

use super::{DayAvailability, DayOfWeek, WeekStart};
use crate::domain::foundation::{Timestamp, WorkerId};

/// Exactly one `DayAvailability` per day of the week.
///
/// Stored in numeric order (Sunday first); use [`WeeklyAvailability::iter`]
/// for display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DayAvailability>", into = "Vec<DayAvailability>")]
pub struct WeeklyAvailability {
    days: [DayAvailability; 7],
}

impl WeeklyAvailability {
    /// A week with every day empty and unavailable.
    pub fn empty() -> Self {
        Self {
            days: DayOfWeek::ALL.map(DayAvailability::empty),
        }
    }

    /// Seeds a week from caller data, keyed by `day_of_week`.
    ///
    /// Missing days are empty; if a day appears twice the later entry wins.
    /// A day flagged available without slots comes in unavailable.
    pub fn from_days(initial: impl IntoIterator<Item = DayAvailability>) -> Self {
        let mut week = Self::empty();
        for day in initial {
            let index = day.day_of_week.index() as usize;
            week.days[index] = day.normalized();
        }
        week
    }

    pub fn day(&self, day: DayOfWeek) -> &DayAvailability {
        &self.days[day.index() as usize]
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DayAvailability {
        &mut self.days[day.index() as usize]
    }

    /// Days in display order.
    pub fn iter(&self, week_start: WeekStart) -> impl Iterator<Item = &DayAvailability> + '_ {
        week_start.days().into_iter().map(move |d| self.day(d))
    }

    /// Days marked available, in display order.
    pub fn available_days(&self, week_start: WeekStart) -> Vec<DayAvailability> {
        self.iter(week_start)
            .filter(|d| d.is_available)
            .cloned()
            .collect()
    }

    /// All seven days in display order.
    pub fn to_vec(&self, week_start: WeekStart) -> Vec<DayAvailability> {
        self.iter(week_start).cloned().collect()
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<DayAvailability>> for WeeklyAvailability {
    fn from(days: Vec<DayAvailability>) -> Self {
        Self::from_days(days)
    }
}

impl From<WeeklyAvailability> for Vec<DayAvailability> {
    fn from(week: WeeklyAvailability) -> Self {
        week.days.into()
    }
}

/// A worker's saved weekly pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAvailability {
    pub worker_id: WorkerId,
    pub days: Vec<DayAvailability>,
    pub updated_at: Timestamp,
}

impl StoredAvailability {
    pub fn new(worker_id: WorkerId, days: Vec<DayAvailability>) -> Self {
        Self {
            worker_id,
            days,
            updated_at: Timestamp::now(),
        }
    }

    /// Expands the stored days into a full week.
    pub fn to_week(&self) -> WeeklyAvailability {
        WeeklyAvailability::from_days(self.days.iter().cloned())
    }
}
