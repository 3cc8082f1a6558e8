//! Command infrastructure for application handlers.
//!
//! `CommandMetadata` carries the acting worker and correlation context through
//! a command so emitted events can be tied back to the request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkerId;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Who is executing the command (the worker, or an administrator on their behalf).
    pub actor_id: WorkerId,

    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "editor", "import").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with the acting worker.
    pub fn new(actor_id: WorkerId) -> Self {
        Self {
            actor_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> WorkerId {
        WorkerId::new("emp-001").unwrap()
    }

    #[test]
    fn new_creates_with_actor_only() {
        let metadata = CommandMetadata::new(actor());

        assert_eq!(metadata.actor_id, actor());
        assert!(metadata.correlation_id.is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn correlation_id_returns_explicit_value() {
        let metadata = CommandMetadata::new(actor()).with_correlation_id("corr-9");
        assert_eq!(metadata.correlation_id(), "corr-9");
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(actor());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn serialization_skips_unset_fields() {
        let json = serde_json::to_string(&CommandMetadata::new(actor())).unwrap();
        assert!(!json.contains("correlation_id"));
        assert!(!json.contains("source"));
    }
}
