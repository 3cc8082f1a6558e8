//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that captures envelopes

mod in_memory;

pub use in_memory::InMemoryEventBus;
