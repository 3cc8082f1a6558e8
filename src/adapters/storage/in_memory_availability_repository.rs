//! In-Memory Availability Repository
//!
//! Keeps weekly patterns in a map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::availability::StoredAvailability;
use crate::domain::foundation::WorkerId;
use crate::ports::{AvailabilityRepository, RepositoryError};

/// In-memory storage for weekly availability
#[derive(Debug, Clone, Default)]
pub struct InMemoryAvailabilityRepository {
    records: Arc<RwLock<HashMap<WorkerId, StoredAvailability>>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn save(&self, availability: &StoredAvailability) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(availability.worker_id.clone(), availability.clone());
        Ok(())
    }

    async fn find_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Option<StoredAvailability>, RepositoryError> {
        Ok(self.records.read().await.get(worker_id).cloned())
    }

    async fn delete(&self, worker_id: &WorkerId) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .remove(worker_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(worker_id.clone()))
    }

    async fn exists(&self, worker_id: &WorkerId) -> Result<bool, RepositoryError> {
        Ok(self.records.read().await.contains_key(worker_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str) -> StoredAvailability {
        StoredAvailability::new(WorkerId::new(id).unwrap(), vec![])
    }

    #[tokio::test]
    async fn save_replaces_previous_pattern() {
        let repo = InMemoryAvailabilityRepository::new();
        repo.save(&stored("emp-1")).await.unwrap();
        repo.save(&stored("emp-1")).await.unwrap();
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_and_exists() {
        let repo = InMemoryAvailabilityRepository::new();
        let id = WorkerId::new("emp-1").unwrap();
        assert!(repo.find_by_worker(&id).await.unwrap().is_none());

        repo.save(&stored("emp-1")).await.unwrap();
        assert!(repo.exists(&id).await.unwrap());
        assert_eq!(repo.find_by_worker(&id).await.unwrap().unwrap().worker_id, id);
    }

    #[tokio::test]
    async fn delete_unknown_worker_is_not_found() {
        let repo = InMemoryAvailabilityRepository::new();
        let result = repo.delete(&WorkerId::new("ghost").unwrap()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryAvailabilityRepository::new();
        let other = repo.clone();
        repo.save(&stored("emp-1")).await.unwrap();
        assert_eq!(other.count().await, 1);
        other.clear().await;
        assert_eq!(repo.count().await, 0);
    }
}
