//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types, the state machine trait and
//! event plumbing shared by the availability domain.

mod command;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{SlotId, WorkerId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
