//! File-based Availability Repository
//!
//! Stores each worker's weekly pattern as a YAML file on disk:
//! `<base_path>/<worker_id>.yaml`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::availability::StoredAvailability;
use crate::domain::foundation::WorkerId;
use crate::ports::{AvailabilityRepository, RepositoryError};

/// File-based storage for weekly availability
#[derive(Debug, Clone)]
pub struct FileAvailabilityRepository {
    base_path: PathBuf,
}

impl FileAvailabilityRepository {
    /// Create a repository rooted at `base_path`; the directory is created on
    /// first save.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileAvailabilityRepository::new("./data/availability");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Worker ids become file names, so anything that could escape the base
    /// directory is refused.
    fn worker_file(&self, worker_id: &WorkerId) -> Result<PathBuf, RepositoryError> {
        let id = worker_id.as_str();
        let safe = id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !id.starts_with('.');
        if !safe {
            return Err(RepositoryError::IoError(format!(
                "worker id '{}' is not usable as a file name",
                id
            )));
        }
        Ok(self.base_path.join(format!("{}.yaml", id)))
    }

    async fn ensure_dir(&self) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AvailabilityRepository for FileAvailabilityRepository {
    async fn save(&self, availability: &StoredAvailability) -> Result<(), RepositoryError> {
        let file_path = self.worker_file(&availability.worker_id)?;
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(availability)
            .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?;

        fs::write(&file_path, yaml)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        tracing::debug!(worker_id = %availability.worker_id, path = %file_path.display(), "availability written");
        Ok(())
    }

    async fn find_by_worker(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Option<StoredAvailability>, RepositoryError> {
        let file_path = self.worker_file(worker_id)?;
        if !file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        let stored = serde_yaml::from_str(&yaml)
            .map_err(|e| RepositoryError::DeserializationFailed(e.to_string()))?;

        Ok(Some(stored))
    }

    async fn delete(&self, worker_id: &WorkerId) -> Result<(), RepositoryError> {
        let file_path = self.worker_file(worker_id)?;
        if !file_path.exists() {
            return Err(RepositoryError::NotFound(worker_id.clone()));
        }

        fs::remove_file(&file_path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))
    }

    async fn exists(&self, worker_id: &WorkerId) -> Result<bool, RepositoryError> {
        Ok(self.worker_file(worker_id)?.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::{DayAvailability, DayOfWeek, TimeOfDay, TimeSlot};
    use tempfile::TempDir;

    fn worker(id: &str) -> WorkerId {
        WorkerId::new(id).unwrap()
    }

    fn sample(id: &str) -> StoredAvailability {
        let slot = TimeSlot::new(
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(12, 30).unwrap(),
        );
        StoredAvailability::new(
            worker(id),
            vec![DayAvailability::with_slots(DayOfWeek::Tuesday, vec![slot])],
        )
    }

    #[tokio::test]
    async fn save_and_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = FileAvailabilityRepository::new(dir.path());
        let stored = sample("emp-1");

        repo.save(&stored).await.unwrap();
        let loaded = repo.find_by_worker(&worker("emp-1")).await.unwrap();

        assert_eq!(loaded, Some(stored));
    }

    #[tokio::test]
    async fn writes_one_yaml_file_per_worker() {
        let dir = TempDir::new().unwrap();
        let repo = FileAvailabilityRepository::new(dir.path().join("nested"));

        repo.save(&sample("emp-1")).await.unwrap();
        repo.save(&sample("emp-2")).await.unwrap();

        let yaml = std::fs::read_to_string(dir.path().join("nested/emp-1.yaml")).unwrap();
        assert!(yaml.contains("emp-1"));
        assert!(yaml.contains("startTime"));
        assert!(dir.path().join("nested/emp-2.yaml").exists());
    }

    #[tokio::test]
    async fn missing_worker_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let repo = FileAvailabilityRepository::new(dir.path());
        assert_eq!(repo.find_by_worker(&worker("nobody")).await.unwrap(), None);
        assert!(!repo.exists(&worker("nobody")).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileAvailabilityRepository::new(dir.path());
        repo.save(&sample("emp-1")).await.unwrap();

        repo.delete(&worker("emp-1")).await.unwrap();
        assert!(!repo.exists(&worker("emp-1")).await.unwrap());
        assert!(matches!(
            repo.delete(&worker("emp-1")).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn rejects_path_like_worker_ids() {
        let dir = TempDir::new().unwrap();
        let repo = FileAvailabilityRepository::new(dir.path());
        assert!(repo.find_by_worker(&worker("../etc/passwd")).await.is_err());
        assert!(repo.exists(&worker(".hidden")).await.is_err());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_deserialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("emp-9.yaml"), "days: [not, a, day]").unwrap();
        let repo = FileAvailabilityRepository::new(dir.path());

        assert!(matches!(
            repo.find_by_worker(&worker("emp-9")).await,
            Err(RepositoryError::DeserializationFailed(_))
        ));
    }
}
