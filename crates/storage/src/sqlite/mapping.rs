use detective_core::model::{DetectiveName, PlayerRecord, Progress};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_player_row(row: &sqlx::sqlite::SqliteRow) -> Result<PlayerRecord, StorageError> {
    let name = DetectiveName::new(row.try_get::<String, _>("name").map_err(ser)?).map_err(ser)?;
    // Older rows may carry a NULL progress; treat those as never started.
    let progress = row
        .try_get::<Option<String>, _>("progress")
        .map_err(ser)?
        .map_or(Progress::NotStarted, |tag| Progress::from_tag(&tag));

    Ok(PlayerRecord::new(name, progress))
}
