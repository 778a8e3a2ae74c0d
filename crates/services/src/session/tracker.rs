use std::sync::Arc;

use detective_core::model::{DetectiveName, Progress};
use storage::repository::{PlayerRepository, StorageError};
use tracing::warn;

/// Where session progress goes: a player repository, or nowhere when the
/// store could not be opened at startup.
#[derive(Clone)]
pub enum ProgressTracker {
    Enabled(Arc<dyn PlayerRepository>),
    Disabled,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self::Enabled(players)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Register the player if they are new.
    ///
    /// Returns the progress already on record for a returning player, or
    /// `None` for a first visit (or when tracking is disabled).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be created or read back.
    pub async fn ensure_player(
        &self,
        name: &DetectiveName,
    ) -> Result<Option<Progress>, StorageError> {
        let Self::Enabled(players) = self else {
            return Ok(None);
        };
        if players.create_if_absent(name, &Progress::NotStarted).await? {
            return Ok(None);
        }
        let record = players.get_player(name).await?;
        Ok(record.map(|r| r.progress().clone()))
    }

    /// Persist the latest progress for `name`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn record(&self, name: &DetectiveName, progress: &Progress) -> Result<(), StorageError> {
        let Self::Enabled(players) = self else {
            return Ok(());
        };
        if !players.update_progress(name, progress).await? {
            warn!(player = %name, %progress, "no player record to update");
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled(_) => f.write_str("ProgressTracker::Enabled"),
            Self::Disabled => f.write_str("ProgressTracker::Disabled"),
        }
    }
}
