mod outcome;
mod service;
mod tracker;

// Public API of the session subsystem.
pub use outcome::IntentOutcome;
pub use service::CaseSession;
pub use tracker::ProgressTracker;
