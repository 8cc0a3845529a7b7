mod common;

use common::{generator, ScriptedClient};
use std::time::Duration;
use tempfile::TempDir;
use thinkers_core::{ArtifactKind, ItemOutcome, Roster};
use thinkers_llm::LlmError;
use thinkers_store::{list_artifacts, read_jsonl, RunRecord};

fn essay_files(root: &std::path::Path) -> Vec<String> {
    list_artifacts(&root.join("thinkers_texts"), "_meaning.txt")
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_batch_writes_one_file_per_thinker() {
    let temp = TempDir::new().unwrap();
    let gen = generator(temp.path(), ScriptedClient::new());

    let summary = gen.run_batch(ArtifactKind::Essay, &Roster::builtin()).await;

    assert_eq!(summary.succeeded().len(), 5);
    assert!(summary.failed().is_empty());
    assert_eq!(
        essay_files(temp.path()),
        vec![
            "albert_camus_meaning.txt",
            "friedrich_nietzsche_meaning.txt",
            "jean-paul_sartre_meaning.txt",
            "søren_kierkegaard_meaning.txt",
            "viktor_frankl_meaning.txt",
        ]
    );
}

#[tokio::test]
async fn test_permanent_failure_skips_only_that_thinker() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new().fail_always(
        "Simone Weil",
        LlmError::InvalidRequest("HTTP 400: content policy".to_string()),
    );
    let gen = generator(temp.path(), client);
    let roster = Roster::from_names(["Hannah Arendt", "Simone Weil", "Albert Camus"]).unwrap();

    let summary = gen.run_batch(ArtifactKind::Essay, &roster).await;

    assert_eq!(
        essay_files(temp.path()),
        vec!["albert_camus_meaning.txt", "hannah_arendt_meaning.txt"]
    );
    assert_eq!(summary.failed().len(), 1);
    assert_eq!(summary.failed()[0].0, "Simone Weil");
    assert!(summary.failed()[0].1.contains("content policy"));
    // permanent errors are not retried
    assert_eq!(gen.client().calls_for("Simone Weil"), 1);
}

#[tokio::test]
async fn test_transient_failures_exhaust_retries_then_continue() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new().fail_always(
        "Albert Camus",
        LlmError::RateLimited { retry_after: None },
    );
    let gen = generator(temp.path(), client);
    let roster = Roster::from_names(["Albert Camus", "Viktor Frankl"]).unwrap();

    let summary = gen.run_batch(ArtifactKind::Essay, &roster).await;

    assert_eq!(
        summary.items[0].1,
        ItemOutcome::Failed("rate limited by provider".to_string())
    );
    assert!(matches!(summary.items[1].1, ItemOutcome::Succeeded(_)));
    assert_eq!(essay_files(temp.path()), vec!["viktor_frankl_meaning.txt"]);
    assert_eq!(gen.client().calls_for("Albert Camus"), 3);
}

#[tokio::test]
async fn test_sleeps_follow_retry_then_rate_limit_schedule() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new().script(
        "Albert Camus",
        vec![Err(LlmError::Transient("timeout".to_string()))],
    );
    let gen = generator(temp.path(), client);
    let roster = Roster::from_names(["Albert Camus", "Viktor Frankl", "Jean-Paul Sartre"]).unwrap();

    let summary = gen.run_batch(ArtifactKind::Essay, &roster).await;
    assert_eq!(summary.succeeded().len(), 3);

    // one backoff for Camus' retry, then the inter-item delay twice, none after the last
    assert_eq!(
        gen.sleeper().slept(),
        vec![
            Duration::from_millis(100),
            Duration::from_secs(2),
            Duration::from_secs(2),
        ]
    );
}

#[tokio::test]
async fn test_run_log_records_summary() {
    let temp = TempDir::new().unwrap();
    let client = ScriptedClient::new()
        .fail_always("Viktor Frankl", LlmError::Auth("HTTP 401".to_string()));
    let gen = generator(temp.path(), client);
    let roster = Roster::from_names(["Viktor Frankl", "Albert Camus"]).unwrap();

    let summary = gen.run_batch(ArtifactKind::Essay, &roster).await;
    gen.record_run(&summary).unwrap();
    gen.record_run(&summary).unwrap();

    let runs: Vec<RunRecord> = read_jsonl(&temp.path().join("runs.jsonl")).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].kind, "essay");
    assert_eq!(runs[0].total, 2);
    assert_eq!(runs[0].succeeded, vec!["Albert Camus"]);
    assert_eq!(runs[0].failed[0].thinker, "Viktor Frankl");
}

#[tokio::test]
async fn test_empty_roster_does_nothing() {
    let temp = TempDir::new().unwrap();
    let gen = generator(temp.path(), ScriptedClient::new());

    let summary = gen.run_batch(ArtifactKind::Essay, &Roster::default()).await;

    assert_eq!(summary.total(), 0);
    assert!(gen.sleeper().slept().is_empty());
    assert!(!temp.path().join("thinkers_texts").exists());
}
