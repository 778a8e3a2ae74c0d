//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by `CaseContent` when reading the clue file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("clue file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read clue file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted by `NotesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotesError {
    #[error("no file was chosen")]
    EmptyPath,
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
