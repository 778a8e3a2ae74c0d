mod detective;
mod player;
mod progress;
mod suspect;

pub use detective::{DetectiveName, DetectiveNameError};
pub use player::PlayerRecord;
pub use progress::Progress;
pub use suspect::{Suspect, SuspectCatalog, SuspectError};
