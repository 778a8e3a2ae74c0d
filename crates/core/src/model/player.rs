use crate::model::{DetectiveName, Progress};

/// Persisted shape of a player: one row per distinct detective name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: DetectiveName,
    progress: Progress,
}

impl PlayerRecord {
    #[must_use]
    pub fn new(name: DetectiveName, progress: Progress) -> Self {
        Self { name, progress }
    }

    #[must_use]
    pub fn name(&self) -> &DetectiveName {
        &self.name
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }
}
