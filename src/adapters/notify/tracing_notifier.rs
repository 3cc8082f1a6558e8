//! Notifier that writes editor notices to the tracing log.
//!
//! Used by headless hosts (the CLI, batch imports) where there is no user
//! interface to surface a toast.

use crate::domain::availability::EditorNotice;
use crate::ports::EditorNotifier;

#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl EditorNotifier for TracingNotifier {
    fn notify(&self, notice: EditorNotice) {
        match notice {
            EditorNotice::ValidationFailed { day, message } => {
                tracing::warn!(%day, %message, "availability needs attention");
            }
            EditorNotice::SaveFailed { message } => {
                tracing::error!(%message, "availability not saved");
            }
            EditorNotice::Saved { day_count } => {
                tracing::info!(day_count, "availability updated successfully");
            }
        }
    }

    fn cancelled(&self) {
        tracing::info!("availability editing cancelled");
    }
}
