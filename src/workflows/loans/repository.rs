use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, EmploymentStatus, LoanPurpose};

/// Stored application: the submitted fields plus the id, status, and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub loan_amount: f64,
    pub loan_purpose: LoanPurpose,
    pub employment_status: EmploymentStatus,
    pub annual_income: f64,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Append-only storage so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn append(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("application {0} already exists")]
    Conflict(ApplicationId),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store backed by a locked vector in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryApplicationRepository {
    records: Arc<Mutex<Vec<ApplicationRecord>>>,
}

impl MemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list. Later duplicates of an id are dropped.
    pub fn with_records(records: impl IntoIterator<Item = ApplicationRecord>) -> Self {
        let mut stored: Vec<ApplicationRecord> = Vec::new();
        for record in records {
            if stored.iter().all(|existing| existing.id != record.id) {
                stored.push(record);
            }
        }

        Self {
            records: Arc::new(Mutex::new(stored)),
        }
    }

    /// Number of stored records, counted even after a writer panicked mid-lock.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationRepository for MemoryApplicationRepository {
    fn append(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store lock poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict(record.id));
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}
