//! Availability repository port.
//!
//! Persists one `StoredAvailability` per worker. Saving replaces the whole
//! pattern; there is no partial update.

use async_trait::async_trait;

use crate::domain::availability::StoredAvailability;
use crate::domain::foundation::{DomainError, ErrorCode, WorkerId};

/// Errors that can occur in availability storage.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Availability not found for worker: {0}")]
    NotFound(WorkerId),

    #[error("Failed to serialize availability: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize availability: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        let code = match &err {
            RepositoryError::NotFound(_) => ErrorCode::AvailabilityNotFound,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Repository port for weekly availability.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert or replace a worker's pattern.
    async fn save(&self, availability: &StoredAvailability) -> Result<(), RepositoryError>;

    /// Returns `None` if the worker has never saved.
    async fn find_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Option<StoredAvailability>, RepositoryError>;

    /// # Errors
    ///
    /// - `NotFound` if nothing is stored for the worker
    async fn delete(&self, worker_id: &WorkerId) -> Result<(), RepositoryError>;

    async fn exists(&self, worker_id: &WorkerId) -> Result<bool, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AvailabilityRepository) {}
    }

    #[test]
    fn not_found_maps_to_availability_not_found() {
        let err: DomainError = RepositoryError::NotFound(WorkerId::new("emp-3").unwrap()).into();
        assert_eq!(err.code, ErrorCode::AvailabilityNotFound);
        assert!(err.message.contains("emp-3"));
    }

    #[test]
    fn io_errors_map_to_storage_error() {
        let err: DomainError = RepositoryError::IoError("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
