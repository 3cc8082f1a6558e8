//! AvailabilitySaver port - where the editor hands off a validated week.
//!
//! The editor knows nothing about persistence; the host injects an
//! implementation (typically `SaveWeeklyAvailabilityHandler`).

use async_trait::async_trait;

use crate::domain::availability::DayAvailability;
use crate::domain::foundation::DomainError;

/// Port invoked by `AvailabilityEditor::save` with the validated payload.
///
/// Implementations should treat the call as all-or-nothing: on `Err` the
/// editor keeps its state and the user may retry.
#[async_trait]
pub trait AvailabilitySaver: Send + Sync {
    /// Persist the given days.
    ///
    /// # Errors
    ///
    /// Any `DomainError`; the editor reports it as `SaveFailed`.
    async fn save(&self, availability: Vec<DayAvailability>) -> Result<(), DomainError>;
}
