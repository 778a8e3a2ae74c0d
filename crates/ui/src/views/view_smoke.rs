use detective_core::model::{DetectiveName, Progress};
use storage::repository::{PlayerRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = setup_view_harness(ViewKind::Login, dir.path().join("clues.txt"));

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Detective Login"), "missing title in {html}");
    assert!(html.contains("Enter your name, Detective:"), "missing prompt in {html}");
    assert!(html.contains("Begin Investigation"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn case_view_smoke_greets_and_registers_detective() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness =
        setup_view_harness(ViewKind::Case("Alice".into()), dir.path().join("clues.txt"));

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome, Detective Alice!"), "missing welcome in {html}");
    for label in [
        "Start Case",
        "View Clues",
        "Question Suspects",
        "Make Accusation",
        "Save Notes",
        "Exit",
    ] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("tint-neutral"), "missing tint in {html}");

    let record = harness
        .storage
        .players
        .get_player(&DetectiveName::new("Alice").unwrap())
        .await
        .expect("read player")
        .expect("player registered");
    assert_eq!(record.progress(), &Progress::NotStarted);
}

#[tokio::test(flavor = "current_thread")]
async fn case_view_smoke_shows_returning_progress() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::in_memory();
    let alice = DetectiveName::new("Alice").unwrap();
    storage
        .players
        .create_if_absent(&alice, &Progress::NotStarted)
        .await
        .expect("create player");
    storage
        .players
        .update_progress(&alice, &Progress::Solved)
        .await
        .expect("update player");

    let mut harness = setup_view_harness_with_storage(
        ViewKind::Case("Alice".into()),
        dir.path().join("clues.txt"),
        storage,
    );

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Last recorded progress: Solved"),
        "missing progress in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn case_view_smoke_rejects_blank_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness =
        setup_view_harness(ViewKind::Case("   ".into()), dir.path().join("clues.txt"));

    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("You must enter a name to play!"),
        "missing error in {html}"
    );
    assert!(!html.contains("Start Case"), "desk should not render in {html}");
}
