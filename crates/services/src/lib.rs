#![forbid(unsafe_code)]

pub mod app_services;
pub mod content;
pub mod error;
pub mod notes;
pub mod session;

pub use app_services::AppServices;
pub use content::{CaseContent, FileCaseContent, DEFAULT_CLUES_PATH};
pub use error::{ContentError, NotesError};
pub use notes::NotesService;
pub use session::{CaseSession, IntentOutcome, ProgressTracker};
