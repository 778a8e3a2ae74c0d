use thiserror::Error;

/// One row of the suspect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspect {
    name: &'static str,
    clue: &'static str,
    culprit: bool,
}

impl Suspect {
    #[must_use]
    pub const fn new(name: &'static str, clue: &'static str, culprit: bool) -> Self {
        Self {
            name,
            clue,
            culprit,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn clue(&self) -> &'static str {
        self.clue
    }

    #[must_use]
    pub const fn is_culprit(&self) -> bool {
        self.culprit
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuspectError {
    #[error("suspect table is empty")]
    Empty,
    #[error("suspect table has no culprit")]
    NoCulprit,
    #[error("suspect table marks {count} culprits")]
    MultipleCulprits { count: usize },
    #[error("suspect listed twice: {name}")]
    Duplicate { name: &'static str },
}

/// Ordered, read-only suspect table with exactly one culprit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspectCatalog {
    suspects: &'static [Suspect],
    culprit: usize,
}

impl SuspectCatalog {
    /// Validate a static suspect table.
    ///
    /// # Errors
    ///
    /// Returns `SuspectError` if the table is empty, lists a name twice, or
    /// does not mark exactly one culprit.
    pub fn new(suspects: &'static [Suspect]) -> Result<Self, SuspectError> {
        if suspects.is_empty() {
            return Err(SuspectError::Empty);
        }
        for (idx, suspect) in suspects.iter().enumerate() {
            if suspects[..idx].iter().any(|s| s.name == suspect.name) {
                return Err(SuspectError::Duplicate { name: suspect.name });
            }
        }

        let mut culprits = suspects
            .iter()
            .enumerate()
            .filter(|(_, s)| s.culprit)
            .map(|(idx, _)| idx);
        let culprit = culprits.next().ok_or(SuspectError::NoCulprit)?;
        let extra = culprits.count();
        if extra > 0 {
            return Err(SuspectError::MultipleCulprits { count: extra + 1 });
        }

        Ok(Self { suspects, culprit })
    }

    #[must_use]
    pub fn suspects(&self) -> &'static [Suspect] {
        self.suspects
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.suspects.iter().map(Suspect::name)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static Suspect> {
        self.suspects.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn culprit(&self) -> &'static Suspect {
        &self.suspects[self.culprit]
    }

    #[must_use]
    pub fn is_culprit(&self, name: &str) -> bool {
        self.culprit().name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TWO_CULPRITS: [Suspect; 2] = [
        Suspect::new("A", "clue a", true),
        Suspect::new("B", "clue b", true),
    ];
    static NO_CULPRIT: [Suspect; 1] = [Suspect::new("A", "clue a", false)];
    static DUPLICATE: [Suspect; 2] = [
        Suspect::new("A", "clue a", true),
        Suspect::new("A", "clue b", false),
    ];
    static VALID: [Suspect; 2] = [
        Suspect::new("A", "clue a", false),
        Suspect::new("B", "clue b", true),
    ];

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(SuspectCatalog::new(&[]), Err(SuspectError::Empty));
        assert_eq!(
            SuspectCatalog::new(&NO_CULPRIT),
            Err(SuspectError::NoCulprit)
        );
        assert_eq!(
            SuspectCatalog::new(&TWO_CULPRITS),
            Err(SuspectError::MultipleCulprits { count: 2 })
        );
        assert_eq!(
            SuspectCatalog::new(&DUPLICATE),
            Err(SuspectError::Duplicate { name: "A" })
        );
    }

    #[test]
    fn finds_suspects_and_culprit() {
        let catalog = SuspectCatalog::new(&VALID).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(catalog.culprit().name(), "B");
        assert!(catalog.is_culprit("B"));
        assert!(!catalog.is_culprit("A"));
        assert_eq!(catalog.find("A").map(Suspect::clue), Some("clue a"));
        assert!(catalog.find("Z").is_none());
    }
}
