use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::record::{AssessmentId, StoredAssessment};

/// Storage abstraction so the service can run against any backend.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: StoredAssessment) -> Result<StoredAssessment, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<StoredAssessment>, RepositoryError>;
    fn list(&self) -> Result<Vec<StoredAssessment>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the HTTP service and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, StoredAssessment>>>,
}

impl InMemoryAssessmentRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<AssessmentId, StoredAssessment>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: StoredAssessment) -> Result<StoredAssessment, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<StoredAssessment>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.values().cloned().collect())
    }
}
