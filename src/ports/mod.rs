//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Editor Ports
//!
//! - `AvailabilitySaver` - Receives the validated week when the user saves
//! - `EditorNotifier` - User-facing notices and the cancel callback
//!
//! ## Persistence & Events
//!
//! - `AvailabilityRepository` - Stored weekly patterns, one per worker
//! - `EventPublisher` - Port for publishing domain events

mod availability_repository;
mod availability_saver;
mod editor_notifier;
mod event_publisher;

pub use availability_repository::{AvailabilityRepository, RepositoryError};
pub use availability_saver::AvailabilitySaver;
pub use editor_notifier::EditorNotifier;
pub use event_publisher::EventPublisher;
