//! The one case shipped with the game: the museum painting theft.

use crate::model::{DetectiveName, Suspect, SuspectCatalog};

static MUSEUM_SUSPECTS: [Suspect; 3] = [
    Suspect::new(
        "Zwelibanzi Ntanzi",
        "Zwelibanzi had access to the museum's security systems.",
        true,
    ),
    Suspect::new(
        "Thembelani Tshaka",
        "Thembelani was spotted out of town during the theft.",
        false,
    ),
    Suspect::new(
        "Tevin Monayi",
        "Tevin claims he was attending a lecture at the university that evening.",
        false,
    ),
];

const SOLVED_NARRATIVE: &str =
    "✅ Correct! Zwelibanzi Ntanzi disabled the cameras and stole the painting.";
const WRONG_NARRATIVE: &str = "❌ Wrong choice! The real thief got away. Try again.";

/// Outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub narrative: &'static str,
}

/// Static case content: the crime narrative plus its suspect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFile {
    catalog: SuspectCatalog,
}

impl CaseFile {
    /// The museum heist case.
    ///
    /// # Panics
    ///
    /// Panics if the built-in suspect table is malformed.
    #[must_use]
    pub fn museum_heist() -> Self {
        let catalog =
            SuspectCatalog::new(&MUSEUM_SUSPECTS).expect("built-in suspect table should be valid");
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &SuspectCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn crime_intro(&self, detective: &DetectiveName) -> String {
        format!(
            "📍 Crime Scene: A priceless painting was stolen from the museum.\n\
             Detective {detective}, you must find out who did it!\n"
        )
    }

    /// Judge an accusation. Returns `None` for names outside the suspect table.
    #[must_use]
    pub fn judge(&self, accused: &str) -> Option<Verdict> {
        let suspect = self.catalog.find(accused)?;
        Some(if suspect.is_culprit() {
            Verdict {
                correct: true,
                narrative: SOLVED_NARRATIVE,
            }
        } else {
            Verdict {
                correct: false,
                narrative: WRONG_NARRATIVE,
            }
        })
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::museum_heist()
    }
}
