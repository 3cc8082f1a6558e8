//! Notifier that records what it was told.
//!
//! Lets tests and embedding hosts inspect editor feedback after the fact.
//!
//! # Example
//!
//! ```ignore
//! let notifier = Arc::new(RecordingNotifier::new());
//! let mut editor = AvailabilityEditor::new(days, settings, saver, notifier.clone());
//!
//! editor.save().await?;
//! assert_eq!(notifier.notices(), vec![EditorNotice::Saved { day_count: 2 }]);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::availability::EditorNotice;
use crate::ports::EditorNotifier;

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<EditorNotice>>>,
    cancellations: Arc<Mutex<usize>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices in the order they were sent.
    pub fn notices(&self) -> Vec<EditorNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_notice(&self) -> Option<EditorNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// How many times the cancel callback fired.
    pub fn cancel_count(&self) -> usize {
        *self
            .cancellations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl EditorNotifier for RecordingNotifier {
    fn notify(&self, notice: EditorNotice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn cancelled(&self) {
        *self
            .cancellations
            .lock()
            .unwrap_or_else(PoisonError::into_inner) += 1;
    }
}
