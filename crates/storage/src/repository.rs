use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::survey_store::{KeyValueSurveyStore, SurveyStore};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Minimal string key-value contract, the local equivalent of `localStorage`.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Aggregates the raw key-value repository and the survey store behind trait
/// objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueRepository>,
    pub survey: Arc<dyn SurveyStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_kv(Arc::new(InMemoryRepository::new()))
    }

    /// Build storage on top of any key-value backend.
    #[must_use]
    pub fn from_kv(kv: Arc<dyn KeyValueRepository>) -> Self {
        let survey: Arc<dyn SurveyStore> = Arc::new(KeyValueSurveyStore::new(Arc::clone(&kv)));
        Self { kv, survey }
    }
}
