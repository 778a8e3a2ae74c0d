use std::fmt;

const NOT_STARTED: &str = "Not Started";
const STARTED: &str = "Started";
const QUESTIONED_PREFIX: &str = "Questioned: ";
const SOLVED: &str = "Solved";
const WRONG_ACCUSATION: &str = "Wrong Accusation";

/// Coarse progress marker for a detective.
///
/// The persisted form is a plain string tag (see [`Progress::as_tag`]). The
/// set of tags is open-ended: anything not recognized survives a round trip
/// as [`Progress::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Progress {
    #[default]
    NotStarted,
    Started,
    Questioned(String),
    Solved,
    WrongAccusation,
    Other(String),
}

impl Progress {
    /// Parse a persisted progress tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            NOT_STARTED => Self::NotStarted,
            STARTED => Self::Started,
            SOLVED => Self::Solved,
            WRONG_ACCUSATION => Self::WrongAccusation,
            other => match other.strip_prefix(QUESTIONED_PREFIX) {
                Some(suspect) if !suspect.is_empty() => Self::Questioned(suspect.to_string()),
                _ => Self::Other(other.to_string()),
            },
        }
    }

    /// The canonical string tag stored for this progress value.
    #[must_use]
    pub fn as_tag(&self) -> String {
        match self {
            Self::NotStarted => NOT_STARTED.to_string(),
            Self::Started => STARTED.to_string(),
            Self::Questioned(suspect) => format!("{QUESTIONED_PREFIX}{suspect}"),
            Self::Solved => SOLVED.to_string(),
            Self::WrongAccusation => WRONG_ACCUSATION.to_string(),
            Self::Other(tag) => tag.clone(),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_tag())
    }
}
