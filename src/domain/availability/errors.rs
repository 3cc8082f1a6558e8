//! Availability-specific error types.

use thiserror::Error;

use super::{DayOfWeek, SlotConflict};
use crate::domain::foundation::{DomainError, ErrorCode, SlotId, ValidationError};

/// Errors raised by availability validation and the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// A slot is missing a bound or does not end after it starts.
    #[error("{day}: time slot must end after it starts")]
    InvalidRange { day: DayOfWeek, slot_id: SlotId },

    /// Two or more slots on the same day intersect.
    #[error("{day}: {} overlapping time slot pair(s)", conflicts.len())]
    OverlapConflict {
        day: DayOfWeek,
        conflicts: Vec<SlotConflict>,
    },

    /// The injected save port rejected the payload.
    #[error("Failed to save availability: {0}")]
    SaveFailed(String),

    /// The editor was already saved or cancelled.
    #[error("Availability editor is closed")]
    EditorClosed,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AvailabilityError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AvailabilityError::InvalidRange { .. } => ErrorCode::InvalidRange,
            AvailabilityError::OverlapConflict { .. } => ErrorCode::OverlapConflict,
            AvailabilityError::SaveFailed(_) => ErrorCode::SaveFailed,
            AvailabilityError::EditorClosed => ErrorCode::EditorClosed,
            AvailabilityError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    /// The day a validation failure is about, if any.
    pub fn day(&self) -> Option<DayOfWeek> {
        match self {
            AvailabilityError::InvalidRange { day, .. }
            | AvailabilityError::OverlapConflict { day, .. } => Some(*day),
            _ => None,
        }
    }

    /// Whether this blocks saving until the user fixes their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AvailabilityError::InvalidRange { .. }
                | AvailabilityError::OverlapConflict { .. }
                | AvailabilityError::Validation(_)
        )
    }
}

impl From<AvailabilityError> for DomainError {
    fn from(err: AvailabilityError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err.day() {
            Some(day) => domain.with_detail("day", day.name()),
            None => domain,
        }
    }
}
