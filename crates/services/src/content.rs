use std::io::ErrorKind;
use std::path::PathBuf;

use detective_core::model::DetectiveName;
use detective_core::{CaseFile, Verdict};
use tracing::{debug, warn};

use crate::error::ContentError;

/// Default clue file location, relative to the working directory.
pub const DEFAULT_CLUES_PATH: &str = "resource/clues.txt";

/// Read-only source of case text: the static case file plus the external clue text.
pub trait CaseContent: Send + Sync {
    fn case(&self) -> &CaseFile;

    /// Full contents of the clue file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` when the file is absent, or
    /// `ContentError::Io` for any other read failure.
    fn clue_text(&self) -> Result<String, ContentError>;

    fn crime_intro(&self, detective: &DetectiveName) -> String {
        self.case().crime_intro(detective)
    }

    fn suspects(&self) -> Vec<&'static str> {
        self.case().catalog().names().collect()
    }

    fn clue_for(&self, suspect: &str) -> Option<&'static str> {
        self.case().catalog().find(suspect).map(|s| s.clue())
    }

    fn culprit(&self) -> &'static str {
        self.case().catalog().culprit().name()
    }

    fn judge(&self, accused: &str) -> Option<Verdict> {
        self.case().judge(accused)
    }

    /// Clue text ready for display, substituting a notice when the file is unusable.
    fn clue_display(&self) -> String {
        match self.clue_text() {
            Ok(text) => text,
            Err(ContentError::NotFound { path }) => {
                let file = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());
                format!("❌ {file} NOT found!\nLooking in:\n{}", path.display())
            }
            Err(ContentError::Io { path, .. }) => {
                format!("❌ Error reading file: {}", path.display())
            }
        }
    }
}

/// Case content backed by the built-in case and a clue file on disk.
#[derive(Debug, Clone)]
pub struct FileCaseContent {
    case: CaseFile,
    clues_path: PathBuf,
}

impl FileCaseContent {
    #[must_use]
    pub fn new(case: CaseFile, clues_path: impl Into<PathBuf>) -> Self {
        Self {
            case,
            clues_path: clues_path.into(),
        }
    }

    fn absolute_clues_path(&self) -> PathBuf {
        std::path::absolute(&self.clues_path).unwrap_or_else(|_| self.clues_path.clone())
    }
}

impl Default for FileCaseContent {
    fn default() -> Self {
        Self::new(CaseFile::museum_heist(), DEFAULT_CLUES_PATH)
    }
}

impl CaseContent for FileCaseContent {
    fn case(&self) -> &CaseFile {
        &self.case
    }

    fn clue_text(&self) -> Result<String, ContentError> {
        match std::fs::read_to_string(&self.clues_path) {
            Ok(text) => {
                debug!(path = %self.clues_path.display(), bytes = text.len(), "read clue file");
                Ok(text)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let path = self.absolute_clues_path();
                warn!(path = %path.display(), "clue file not found");
                Err(ContentError::NotFound { path })
            }
            Err(source) => {
                let path = self.absolute_clues_path();
                warn!(path = %path.display(), error = %source, "could not read clue file");
                Err(ContentError::Io { path, source })
            }
        }
    }
}
