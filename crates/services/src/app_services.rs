use std::path::PathBuf;
use std::sync::Arc;

use detective_core::CaseFile;
use detective_core::model::DetectiveName;
use storage::repository::Storage;
use tracing::warn;

use crate::content::{CaseContent, FileCaseContent};
use crate::notes::NotesService;
use crate::session::{CaseSession, IntentOutcome, ProgressTracker};

/// Assembles app-facing services.
///
/// Never fails to build: if the store cannot be opened the game runs with
/// progress tracking disabled and the reason is kept for the UI to report.
#[derive(Clone)]
pub struct AppServices {
    content: Arc<dyn CaseContent>,
    tracker: ProgressTracker,
    notes: NotesService,
    storage_unavailable: Option<String>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: Option<Storage>, content: Arc<dyn CaseContent>) -> Self {
        let tracker = storage.map_or(ProgressTracker::Disabled, |s| {
            ProgressTracker::new(s.players)
        });
        Self {
            content,
            tracker,
            notes: NotesService::new(),
            storage_unavailable: None,
        }
    }

    /// Build services backed by `SQLite` storage and the clue file at `clues_path`.
    pub async fn new_sqlite(db_url: &str, clues_path: impl Into<PathBuf>) -> Self {
        let content: Arc<dyn CaseContent> =
            Arc::new(FileCaseContent::new(CaseFile::museum_heist(), clues_path));
        match Storage::sqlite(db_url).await {
            Ok(storage) => Self::new(Some(storage), content),
            Err(err) => {
                warn!(db_url, error = %err, "progress tracking disabled");
                Self::new(None, content).with_storage_unavailable(err.to_string())
            }
        }
    }

    #[must_use]
    pub fn with_storage_unavailable(mut self, reason: impl Into<String>) -> Self {
        self.tracker = ProgressTracker::Disabled;
        self.storage_unavailable = Some(reason.into());
        self
    }

    /// Why progress tracking is off, if it is.
    #[must_use]
    pub fn storage_unavailable(&self) -> Option<&str> {
        self.storage_unavailable.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> Arc<dyn CaseContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn notes(&self) -> NotesService {
        self.notes
    }

    /// Open a session for `detective`, registering them if new.
    pub async fn open_session(&self, detective: DetectiveName) -> IntentOutcome<CaseSession> {
        CaseSession::open(detective, self.content(), self.tracker.clone()).await
    }
}
