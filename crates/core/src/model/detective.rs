use thiserror::Error;

/// Validated detective name (trimmed, non-empty).
///
/// The name is the player's identity for the whole process lifetime and the
/// primary key of their persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetectiveName(String);

impl DetectiveName {
    /// Create a validated detective name.
    ///
    /// # Errors
    ///
    /// Returns `DetectiveNameError::Empty` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DetectiveNameError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DetectiveNameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DetectiveName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectiveNameError {
    #[error("you must enter a name to play")]
    Empty,
}
