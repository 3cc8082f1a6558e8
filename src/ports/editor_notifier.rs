//! EditorNotifier port - user-facing feedback from the editor.

use crate::domain::availability::EditorNotice;

/// Receives notices the editor wants shown to the user, plus the
/// cancellation callback.
///
/// Calls are synchronous and must not block; adapters that need I/O should
/// hand off to their own task.
pub trait EditorNotifier: Send + Sync {
    fn notify(&self, notice: EditorNotice);

    /// The user abandoned the editing session.
    fn cancelled(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn EditorNotifier) {}
    }
}
