use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::SqliteInitError;

/// Runs the versioned schema migrations.
///
/// Idempotent: applied versions are recorded in `schema_migrations` and
/// skipped on later startups.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: players plus the questioned-suspects placeholder.
    if is_applied(pool, 1).await? {
        debug!("schema version 1 already applied");
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS players (
                name TEXT PRIMARY KEY,
                progress TEXT NOT NULL
            );
        ",
    )
    .execute(&mut *tx)
    .await?;

    // Not written by the game yet.
    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS suspects (
                name TEXT,
                questioned INTEGER
            );
        ",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r"
            INSERT INTO schema_migrations (version, applied_at)
            VALUES (?1, ?2)
            ON CONFLICT(version) DO NOTHING
        ",
    )
    .bind(1_i64)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    info!(version = 1, "applied schema migration");

    Ok(())
}
