use detective_core::model::{DetectiveName, Progress};
use storage::repository::{PlayerRepository, Storage};
use storage::sqlite::SqliteRepository;

fn name(value: &str) -> DetectiveName {
    DetectiveName::new(value).unwrap()
}

async fn connect(db: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{db}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let repo = connect("memdb_schema_twice").await;
    repo.ensure_schema().await.expect("second run");
    repo.ensure_schema().await.expect("third run");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('players', 'suspects') ORDER BY name",
    )
    .fetch_all(repo.pool())
    .await
    .unwrap();
    assert_eq!(tables, vec!["players".to_string(), "suspects".to_string()]);
}

#[tokio::test]
async fn create_if_absent_preserves_prior_progress() {
    let repo = connect("memdb_create_if_absent").await;
    let alice = name("Alice");

    assert!(
        repo.create_if_absent(&alice, &Progress::NotStarted)
            .await
            .unwrap()
    );
    assert!(
        repo.update_progress(&alice, &Progress::Questioned("Tevin Monayi".into()))
            .await
            .unwrap()
    );
    assert!(
        !repo
            .create_if_absent(&alice, &Progress::NotStarted)
            .await
            .unwrap()
    );

    let record = repo.get_player(&alice).await.unwrap().expect("record");
    assert_eq!(
        record.progress(),
        &Progress::Questioned("Tevin Monayi".into())
    );
}

#[tokio::test]
async fn update_progress_for_unknown_name_creates_nothing() {
    let repo = connect("memdb_update_missing").await;
    let ghost = name("NoSuchName");

    let updated = repo
        .update_progress(&ghost, &Progress::Solved)
        .await
        .expect("no error");
    assert!(!updated);
    assert!(repo.get_player(&ghost).await.unwrap().is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn latest_progress_write_wins() {
    let storage = Storage::sqlite("sqlite:file:memdb_latest_wins?mode=memory&cache=shared")
        .await
        .expect("storage");
    let bob = name("Bob");

    storage
        .players
        .create_if_absent(&bob, &Progress::NotStarted)
        .await
        .unwrap();
    for progress in [
        Progress::Started,
        Progress::Solved,
        Progress::WrongAccusation,
    ] {
        storage.players.update_progress(&bob, &progress).await.unwrap();
    }

    let record = storage.players.get_player(&bob).await.unwrap().unwrap();
    assert_eq!(record.progress(), &Progress::WrongAccusation);
    assert_eq!(record.name().as_str(), "Bob");
}

#[tokio::test]
async fn legacy_null_progress_reads_as_not_started() {
    let repo = connect("memdb_legacy_null").await;
    sqlx::query("CREATE TABLE legacy_players (name TEXT PRIMARY KEY, progress TEXT)")
        .execute(repo.pool())
        .await
        .unwrap();
    // Swap in a table shaped like the original schema, which allowed NULL progress.
    sqlx::query("DROP TABLE players")
        .execute(repo.pool())
        .await
        .unwrap();
    sqlx::query("ALTER TABLE legacy_players RENAME TO players")
        .execute(repo.pool())
        .await
        .unwrap();
    sqlx::query("INSERT INTO players (name, progress) VALUES ('Carol', NULL)")
        .execute(repo.pool())
        .await
        .unwrap();

    let record = repo.get_player(&name("Carol")).await.unwrap().unwrap();
    assert_eq!(record.progress(), &Progress::NotStarted);
}

#[tokio::test]
async fn sqlite_storage_creates_schema_on_open() {
    let url = "sqlite:file:memdb_storage_open?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("open storage");
    let reopened = Storage::sqlite(url).await.expect("reopen storage");

    let inspect = SqliteRepository::connect(url).await.expect("connect");
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(inspect.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);

    let alice = name("Alice");
    assert!(
        storage
            .players
            .create_if_absent(&alice, &Progress::NotStarted)
            .await
            .unwrap()
    );
    let record = reopened.players.get_player(&alice).await.unwrap().unwrap();
    assert_eq!(record.progress(), &Progress::NotStarted);
}
