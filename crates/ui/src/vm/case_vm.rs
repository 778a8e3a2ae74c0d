use std::collections::VecDeque;

use detective_core::model::DetectiveName;
use services::{AppServices, CaseSession, NotesService};
use tracing::debug;

/// What the player asked for. One per button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseIntent {
    Start,
    ViewClues,
    Question(String),
    Accuse(String),
    SaveNotes(String),
    Exit,
}

/// Background of the desk, driven by the last accusation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tint {
    #[default]
    Neutral,
    Solved,
    Wrong,
}

impl Tint {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Tint::Neutral => "tint-neutral",
            Tint::Solved => "tint-solved",
            Tint::Wrong => "tint-wrong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A message that pops over the desk until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the desk renders, detached from the session so the view can
/// keep showing it while an intent is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeskSnapshot {
    pub detective: String,
    pub display: String,
    pub tint: Tint,
    pub notice: Option<Notice>,
    pub exiting: bool,
    pub suspects: Vec<&'static str>,
}

/// Turns player intents into the text on the desk.
///
/// The display is replaced by every intent except saving and exiting; saving
/// writes exactly what is on display.
pub struct CaseVm {
    session: CaseSession,
    notes: NotesService,
    display: String,
    tint: Tint,
    notices: VecDeque<Notice>,
    exiting: bool,
}

impl CaseVm {
    #[must_use]
    pub fn new(session: CaseSession, notes: NotesService) -> Self {
        let mut display = format!(
            "Welcome, Detective {}! Press 'Start Case' to begin.\n",
            session.detective()
        );
        if let Some(previous) = session.returning_progress() {
            display.push_str(&format!("Last recorded progress: {previous}\n"));
        }
        Self {
            session,
            notes,
            display,
            tint: Tint::Neutral,
            notices: VecDeque::new(),
            exiting: false,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn tint(&self) -> Tint {
        self.tint
    }

    #[must_use]
    pub fn session(&self) -> &CaseSession {
        &self.session
    }

    #[must_use]
    pub fn suspects(&self) -> Vec<&'static str> {
        self.session.suspects()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// True once the player chose to exit; the shell closes after the farewell.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    #[must_use]
    pub fn snapshot(&self) -> DeskSnapshot {
        DeskSnapshot {
            detective: self.session.detective().to_string(),
            display: self.display.clone(),
            tint: self.tint,
            notice: self.notice().cloned(),
            exiting: self.exiting,
            suspects: self.suspects(),
        }
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    fn report_storage(&mut self, err: Option<impl std::fmt::Display>) {
        if let Some(err) = err {
            self.push_notice(Notice::error(format!("Error updating progress: {err}")));
        }
    }

    pub async fn dispatch(&mut self, intent: CaseIntent) {
        debug!(detective = %self.session.detective(), ?intent, "dispatching intent");
        match intent {
            CaseIntent::Start => {
                let outcome = self.session.start().await;
                self.display = outcome.value;
                self.tint = Tint::Neutral;
                self.report_storage(outcome.storage_error);
            }
            CaseIntent::ViewClues => {
                self.display = self.session.view_clues();
            }
            CaseIntent::Question(suspect) => {
                if let Some(outcome) = self.session.question_suspect(&suspect).await {
                    self.display = format!(
                        "You questioned {suspect} and found a clue related to them!\nClue: {}\n",
                        outcome.value
                    );
                    self.report_storage(outcome.storage_error);
                }
            }
            CaseIntent::Accuse(suspect) => {
                if let Some(outcome) = self.session.accuse(&suspect).await {
                    let detective = self.session.detective().clone();
                    self.display = outcome.value.narrative.to_string();
                    if outcome.value.correct {
                        self.tint = Tint::Solved;
                        self.push_notice(Notice::success(format!(
                            "🎉 Congratulations, Detective {detective}! You solved the case!"
                        )));
                    } else {
                        self.tint = Tint::Wrong;
                        self.push_notice(Notice::info(format!(
                            "😞 Wrong suspect! Give it another shot, Detective {detective}."
                        )));
                    }
                    self.report_storage(outcome.storage_error);
                }
            }
            CaseIntent::SaveNotes(path) => match self.notes.save(path.trim(), &self.display) {
                Ok(written) => self.push_notice(Notice::success(format!(
                    "✅ Notes saved to:\n{}",
                    written.display()
                ))),
                Err(err) => {
                    self.push_notice(Notice::error(format!("⚠️ Error saving file:\n{err}")));
                }
            },
            CaseIntent::Exit => {
                self.exiting = true;
                self.push_notice(Notice::info(format!(
                    "Thanks for playing! Goodbye, Detective {}.",
                    self.session.detective()
                )));
            }
        }
    }
}

/// Open the detective's session and wrap it for the desk.
///
/// Storage problems at this point are surfaced as notices, never as failures.
pub async fn open_case(services: &AppServices, detective: DetectiveName) -> CaseVm {
    let opened = services.open_session(detective).await;
    let mut vm = CaseVm::new(opened.value, services.notes());
    if let Some(reason) = services.storage_unavailable() {
        vm.push_notice(Notice::error(format!("Database error: {reason}")));
    }
    if let Some(err) = opened.storage_error {
        vm.push_notice(Notice::error(format!("Error saving profile: {err}")));
    }
    vm
}
