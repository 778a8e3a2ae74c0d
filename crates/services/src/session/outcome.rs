use storage::repository::StorageError;

/// Result of one user intent: what to show, plus any non-fatal persistence failure.
///
/// The game keeps going when storage fails, so the failure rides alongside
/// the value instead of replacing it.
#[derive(Debug)]
pub struct IntentOutcome<T> {
    pub value: T,
    pub storage_error: Option<StorageError>,
}

impl<T> IntentOutcome<T> {
    #[must_use]
    pub fn new(value: T, storage_error: Option<StorageError>) -> Self {
        Self {
            value,
            storage_error,
        }
    }

    /// True when no storage write failed. Also true when tracking is disabled
    /// and nothing was written.
    #[must_use]
    pub fn storage_ok(&self) -> bool {
        self.storage_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_ok_reflects_the_carried_error() {
        let clean = IntentOutcome::new("intro", None);
        assert!(clean.storage_ok());

        let failed = IntentOutcome::new(
            "intro",
            Some(StorageError::Connection("database is locked".into())),
        );
        assert!(!failed.storage_ok());
        assert_eq!(failed.value, "intro");
    }
}
