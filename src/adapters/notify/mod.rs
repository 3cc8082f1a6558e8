//! Editor notifier adapters.
//!
//! - `TracingNotifier` - Logs notices for headless hosts
//! - `RecordingNotifier` - Captures notices for assertions and embedding

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
