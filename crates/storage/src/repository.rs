use async_trait::async_trait;
use detective_core::model::{DetectiveName, PlayerRecord, Progress};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
///
/// None of these are fatal to the game; callers report them and keep going.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable mapping from detective name to progress tag.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Make the backing store ready to accept records.
    ///
    /// Safe to call on every startup, including when the schema already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Insert a record for `name` unless one already exists.
    ///
    /// An existing record is left untouched. Returns `true` when a new record
    /// was created.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the insert fails.
    async fn create_if_absent(
        &self,
        name: &DetectiveName,
        initial: &Progress,
    ) -> Result<bool, StorageError>;

    /// Overwrite the progress of the record keyed by `name`.
    ///
    /// A missing record is not an error and nothing is created. Returns `true`
    /// when a record was updated.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the update fails.
    async fn update_progress(
        &self,
        name: &DetectiveName,
        progress: &Progress,
    ) -> Result<bool, StorageError>;

    /// Fetch the record for `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails or the row cannot be decoded.
    async fn get_player(&self, name: &DetectiveName) -> Result<Option<PlayerRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    players: Arc<Mutex<HashMap<DetectiveName, PlayerRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryRepository {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn create_if_absent(
        &self,
        name: &DetectiveName,
        initial: &Progress,
    ) -> Result<bool, StorageError> {
        let mut guard = self
            .players
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(name) {
            return Ok(false);
        }
        guard.insert(
            name.clone(),
            PlayerRecord::new(name.clone(), initial.clone()),
        );
        Ok(true)
    }

    async fn update_progress(
        &self,
        name: &DetectiveName,
        progress: &Progress,
    ) -> Result<bool, StorageError> {
        let mut guard = self
            .players
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.get_mut(name) {
            Some(record) => {
                record.set_progress(progress.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_player(&self, name: &DetectiveName) -> Result<Option<PlayerRecord>, StorageError> {
        let guard = self
            .players
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(name).cloned())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub players: Arc<dyn PlayerRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let players: Arc<dyn PlayerRepository> = Arc::new(InMemoryRepository::new());
        Self { players }
    }
}
