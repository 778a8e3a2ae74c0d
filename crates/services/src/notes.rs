use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::NotesError;

/// Writes the investigation log to a file the player picks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesService;

impl NotesService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Write `transcript` verbatim to `path`, replacing any existing file.
    ///
    /// Returns the absolute path that was written.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::EmptyPath` for a blank path, or `NotesError::Io`
    /// if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>, transcript: &str) -> Result<PathBuf, NotesError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(NotesError::EmptyPath);
        }
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        match std::fs::write(&absolute, transcript) {
            Ok(()) => {
                info!(path = %absolute.display(), bytes = transcript.len(), "saved notes");
                Ok(absolute)
            }
            Err(source) => {
                warn!(path = %absolute.display(), error = %source, "could not save notes");
                Err(NotesError::Io {
                    path: absolute,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_transcript_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        let written = NotesService::new()
            .save(&path, "Clue: fingerprints\n")
            .unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Clue: fingerprints\n");
    }

    #[test]
    fn rejects_blank_path() {
        assert!(matches!(
            NotesService::new().save("", "notes"),
            Err(NotesError::EmptyPath)
        ));
        assert!(matches!(
            NotesService::new().save("   ", "notes"),
            Err(NotesError::EmptyPath)
        ));
    }

    #[test]
    fn reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("log.txt");

        let err = NotesService::new().save(&path, "notes").unwrap_err();
        assert!(matches!(err, NotesError::Io { .. }));
        assert!(err.to_string().contains("log.txt"));
    }
}
