//! End-to-end tests for the cadence binary
//!
//! These drive the compiled binary against scratch repositories and check
//! exit codes, persisted files, and log output.

use assert_cmd::Command;
use predicates::prelude::*;

use super::common::git_fixtures::{log_messages_in, TestRepo};

fn cadence() -> Command {
    Command::cargo_bin("cadence").expect("binary should build")
}

#[test]
fn test_run_in_repo_succeeds() {
    let repo = TestRepo::new();

    cadence()
        .current_dir(&repo.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully completed commit"));

    assert_eq!(
        std::fs::read_to_string(repo.path.join("data/counter.txt")).unwrap(),
        "1"
    );
    assert!(repo.path.join("data/activity.json").exists());
    assert!(repo.path.join("logs/cadence.log").exists());
    assert_eq!(repo.commit_count(), 2);
}

#[test]
fn test_repeated_runs_increment_counter() {
    let repo = TestRepo::new();

    cadence().current_dir(&repo.path).assert().success();
    cadence().current_dir(&repo.path).assert().success();

    assert_eq!(
        std::fs::read_to_string(repo.path.join("data/counter.txt")).unwrap(),
        "2"
    );
    assert_eq!(repo.commit_count(), 3);
}

#[test]
fn test_missing_working_tree_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();

    cadence()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to complete commit"));

    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_project_root_flag_targets_other_repo() {
    let repo = TestRepo::new();
    let elsewhere = tempfile::TempDir::new().unwrap();

    cadence()
        .current_dir(elsewhere.path())
        .arg("-C")
        .arg(&repo.path)
        .assert()
        .success();

    assert!(repo.path.join("data/counter.txt").exists());
    assert!(!elsewhere.path().join("data").exists());
}

#[test]
fn test_no_push_leaves_remote_untouched() {
    let repo = TestRepo::new();
    let bare = repo.add_bare_remote();

    cadence()
        .current_dir(&repo.path)
        .arg("--no-push")
        .assert()
        .success();

    assert_eq!(repo.commit_count(), 2);
    assert!(log_messages_in(bare.path()).is_empty());
}

#[test]
fn test_push_failure_still_exits_zero() {
    let repo = TestRepo::new();
    repo.set_remote("origin", "/nonexistent/cadence-remote.git");

    cadence()
        .current_dir(&repo.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to push to remote"));

    assert_eq!(repo.commit_count(), 2);
}

#[test]
fn test_log_file_appends_across_runs() {
    let repo = TestRepo::new();

    cadence().current_dir(&repo.path).assert().success();
    let first = std::fs::read_to_string(repo.path.join("logs/cadence.log"))
        .unwrap()
        .len();

    cadence().current_dir(&repo.path).assert().success();
    let second = std::fs::read_to_string(repo.path.join("logs/cadence.log"))
        .unwrap()
        .len();

    assert!(second > first, "log file should grow, not be truncated");
}

#[test]
fn test_help_describes_the_tool() {
    cadence()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("activity committer"));
}
