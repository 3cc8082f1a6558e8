//! Editor configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::availability::{
    ClipboardPolicy, EditorSettings, SavePayload, TimeOfDay, WeekStart,
};

/// Editor behaviour knobs
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// First day shown, and the order validation walks the week
    #[serde(default)]
    pub week_start: WeekStart,

    /// Bounds of a newly added slot ("HH:MM")
    #[serde(default = "default_start")]
    pub default_start: TimeOfDay,

    #[serde(default = "default_end")]
    pub default_end: TimeOfDay,

    #[serde(default)]
    pub clipboard_policy: ClipboardPolicy,

    /// Which days are sent to the save port
    #[serde(default)]
    pub save_payload: SavePayload,
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_end <= self.default_start {
            return Err(ValidationError::InvalidDefaultSlot {
                start: self.default_start.to_string(),
                end: self.default_end.to_string(),
            });
        }
        Ok(())
    }

    pub fn settings(&self) -> EditorSettings {
        EditorSettings {
            week_start: self.week_start,
            default_start: self.default_start,
            default_end: self.default_end,
            clipboard_policy: self.clipboard_policy,
            save_payload: self.save_payload,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            default_start: default_start(),
            default_end: default_end(),
            clipboard_policy: ClipboardPolicy::default(),
            save_payload: SavePayload::default(),
        }
    }
}

impl From<&EditorConfig> for EditorSettings {
    fn from(config: &EditorConfig) -> Self {
        config.settings()
    }
}

fn default_start() -> TimeOfDay {
    TimeOfDay::DEFAULT_START
}

fn default_end() -> TimeOfDay {
    TimeOfDay::DEFAULT_END
}
