//! Binary-level checks for `ta`.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

fn ta() -> Command {
    Command::cargo_bin("ta").expect("binary")
}

fn config_arg(dir: &tempfile::TempDir) -> String {
    dir.path().join("arenas.json").display().to_string()
}

fn seed_local_store(path: &Path) {
    let tasks = json!([
        {
            "uuid": "00000000-0000-4000-8000-0000000000aa",
            "entry": "2026-01-01T00:00:00Z",
            "fields": {"description": "paint walls"}
        }
    ]);
    fs::write(path, serde_json::to_string_pretty(&tasks).expect("encode")).expect("write");
}

#[test]
fn no_arguments_prints_usage() {
    ta()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn create_then_list_shows_the_arena() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local = dir.path().join("local.json").display().to_string();
    let remote = dir.path().join("remote.json").display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("New arena registry created"))
        .stdout(predicate::str::contains("Arena alpha created."));

    ta().args(["--config", config.as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arenas loaded."))
        .stdout(predicate::str::contains("arena : alpha"));
}

#[test]
fn duplicate_create_fails_by_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local = dir.path().join("local.json").display().to_string();
    let remote = dir.path().join("remote.json").display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn deleting_an_unknown_arena_fails_by_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);

    ta().args(["--config", config.as_str(), "delete", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("arena `ghost` not found"));
}

#[test]
fn syncing_empty_replicas_reports_in_sync() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local = dir.path().join("local.json").display().to_string();
    let remote = dir.path().join("remote.json").display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "sync", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arena alpha is in sync."));
}

#[test]
fn add_then_bulk_sync_uploads_the_task() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local_path = dir.path().join("local.json");
    let remote_path = dir.path().join("remote.json");
    seed_local_store(&local_path);
    let local = local_path.display().to_string();
    let remote = remote_path.display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "add", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 task(s) added to alpha."));
    ta().args(["--config", config.as_str(), "sync", "alpha", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPLOAD"))
        .stdout(predicate::str::contains("1 uploaded, 0 downloaded, 0 skipped."))
        .stdout(predicate::str::contains("Sync complete."));

    let remote_doc = fs::read_to_string(&remote_path).expect("remote written");
    assert!(remote_doc.contains("paint walls"));
}

#[test]
fn interactive_sync_accepts_all_from_stdin() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local_path = dir.path().join("local.json");
    seed_local_store(&local_path);
    let local = local_path.display().to_string();
    let remote = dir.path().join("remote.json").display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "add", "alpha"])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "sync", "alpha"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(a/m/c)"))
        .stdout(predicate::str::contains("Sync complete."));
}

#[test]
fn interactive_cancel_leaves_the_replicas_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_arg(&dir);
    let local_path = dir.path().join("local.json");
    seed_local_store(&local_path);
    let local = local_path.display().to_string();
    let remote_path = dir.path().join("remote.json");
    let remote = remote_path.display().to_string();

    ta().args(["--config", config.as_str(), "create", "alpha", local.as_str(), remote.as_str()])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "add", "alpha"])
        .assert()
        .success();
    ta().args(["--config", config.as_str(), "sync", "alpha"])
        .write_stdin("c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync canceled."));
    assert!(!remote_path.exists());
}
