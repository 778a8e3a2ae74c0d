use std::sync::Arc;

use detective_core::Verdict;
use detective_core::model::{DetectiveName, Progress};
use storage::repository::StorageError;
use tracing::{debug, info, warn};

use super::outcome::IntentOutcome;
use super::tracker::ProgressTracker;
use crate::content::CaseContent;

/// One detective's playthrough.
///
/// Holds the detective's identity and the latest progress marker. Every
/// progress change is written through the tracker before the intent returns;
/// a failed write is reported, never rolled back.
pub struct CaseSession {
    detective: DetectiveName,
    progress: Progress,
    questioned: Vec<&'static str>,
    returning_progress: Option<Progress>,
    content: Arc<dyn CaseContent>,
    tracker: ProgressTracker,
}

impl CaseSession {
    /// Open a session and make sure the detective has a player record.
    ///
    /// A returning detective keeps whatever progress was already stored.
    pub async fn open(
        detective: DetectiveName,
        content: Arc<dyn CaseContent>,
        tracker: ProgressTracker,
    ) -> IntentOutcome<Self> {
        let (returning_progress, storage_error) = match tracker.ensure_player(&detective).await {
            Ok(previous) => (previous, None),
            Err(err) => {
                warn!(detective = %detective, error = %err, "could not save player profile");
                (None, Some(err))
            }
        };
        info!(
            detective = %detective,
            tracking = tracker.is_enabled(),
            returning = returning_progress.is_some(),
            "opened case session"
        );

        IntentOutcome::new(
            Self {
                detective,
                progress: Progress::NotStarted,
                questioned: Vec::new(),
                returning_progress,
                content,
                tracker,
            },
            storage_error,
        )
    }

    #[must_use]
    pub fn detective(&self) -> &DetectiveName {
        &self.detective
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Progress stored for this detective before the session opened.
    #[must_use]
    pub fn returning_progress(&self) -> Option<&Progress> {
        self.returning_progress.as_ref()
    }

    /// Suspects questioned so far this session, in first-asked order.
    #[must_use]
    pub fn questioned(&self) -> &[&'static str] {
        &self.questioned
    }

    #[must_use]
    pub fn suspects(&self) -> Vec<&'static str> {
        self.content.suspects()
    }

    /// Begin the case. Returns the crime intro.
    pub async fn start(&mut self) -> IntentOutcome<String> {
        let intro = self.content.crime_intro(&self.detective);
        let storage_error = self.advance(Progress::Started).await;
        IntentOutcome::new(intro, storage_error)
    }

    /// Question a suspect and return their clue.
    ///
    /// Returns `None`, without touching progress, for names that are not suspects.
    pub async fn question_suspect(&mut self, suspect: &str) -> Option<IntentOutcome<&'static str>> {
        let Some(found) = self.content.case().catalog().find(suspect) else {
            debug!(suspect, "ignoring question for unknown suspect");
            return None;
        };
        if !self.questioned.contains(&found.name()) {
            self.questioned.push(found.name());
        }
        let storage_error = self
            .advance(Progress::Questioned(found.name().to_string()))
            .await;
        Some(IntentOutcome::new(found.clue(), storage_error))
    }

    /// Accuse a suspect. Re-accusing is allowed and overwrites the verdict.
    ///
    /// Returns `None`, without touching progress, for names that are not suspects.
    pub async fn accuse(&mut self, suspect: &str) -> Option<IntentOutcome<Verdict>> {
        let Some(verdict) = self.content.judge(suspect) else {
            debug!(suspect, "ignoring accusation of unknown suspect");
            return None;
        };
        let progress = if verdict.correct {
            Progress::Solved
        } else {
            Progress::WrongAccusation
        };
        let storage_error = self.advance(progress).await;
        Some(IntentOutcome::new(verdict, storage_error))
    }

    /// Clue file text for display. Does not change progress.
    #[must_use]
    pub fn view_clues(&self) -> String {
        self.content.clue_display()
    }

    async fn advance(&mut self, progress: Progress) -> Option<StorageError> {
        debug!(detective = %self.detective, %progress, "progress changed");
        self.progress = progress;
        match self.tracker.record(&self.detective, &self.progress).await {
            Ok(()) => None,
            Err(err) => {
                warn!(detective = %self.detective, error = %err, "could not update progress");
                Some(err)
            }
        }
    }
}
