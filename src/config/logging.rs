//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log filter and output format
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` overrides it when set
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for local runs
    #[default]
    Pretty,
    /// One JSON object per line, for log shipping
    Json,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info,availability_editor=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,availability_editor=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_json_format_deserializes() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "warn", "format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_level_is_rejected() {
        let config = LoggingConfig {
            level: "  ".into(),
            format: LogFormat::Json,
        };
        assert!(config.validate().is_err());
    }
}
