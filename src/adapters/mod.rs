//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Availability repositories (file, in-memory)
//! - `events` - Event bus implementations
//! - `notify` - Editor notifiers (tracing, recording)

pub mod events;
pub mod notify;
pub mod storage;

pub use events::InMemoryEventBus;
pub use notify::{RecordingNotifier, TracingNotifier};
pub use storage::{FileAvailabilityRepository, InMemoryAvailabilityRepository};
