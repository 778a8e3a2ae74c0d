use async_trait::async_trait;
use detective_core::model::{DetectiveName, PlayerRecord, Progress};
use tracing::debug;

use super::SqliteRepository;
use super::mapping::map_player_row;
use crate::repository::{PlayerRepository, StorageError};

#[async_trait]
impl PlayerRepository for SqliteRepository {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        self.migrate()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn create_if_absent(
        &self,
        name: &DetectiveName,
        initial: &Progress,
    ) -> Result<bool, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO players (name, progress)
            VALUES (?1, ?2)
            ON CONFLICT(name) DO NOTHING
            ",
        )
        .bind(name.as_str())
        .bind(initial.as_tag())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let created = res.rows_affected() > 0;
        debug!(player = %name, created, "ensured player record");
        Ok(created)
    }

    async fn update_progress(
        &self,
        name: &DetectiveName,
        progress: &Progress,
    ) -> Result<bool, StorageError> {
        let res = sqlx::query(
            r"
            UPDATE players SET progress = ?1
            WHERE name = ?2
            ",
        )
        .bind(progress.as_tag())
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let updated = res.rows_affected() > 0;
        debug!(player = %name, %progress, updated, "updated player progress");
        Ok(updated)
    }

    async fn get_player(&self, name: &DetectiveName) -> Result<Option<PlayerRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT name, progress
            FROM players WHERE name = ?1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => map_player_row(&row).map(Some),
            None => Ok(None),
        }
    }
}
