//! CLI integration tests
//!
//! Each test writes a history file into a temp dir and runs the `redline`
//! binary against it.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const HISTORY: &str = r#"{
  "requirements": [
    {"id": "req-1-v2", "entityId": "req-1", "version": 2, "title": "Login",
     "description": "Users sign in with email", "type": "CRS", "status": "Approved",
     "parentId": null, "modifiedBy": "bob", "modifiedAt": "2026-01-02T00:00:00Z"},
    {"id": "req-1-v1", "entityId": "req-1", "version": 1, "title": "Login",
     "description": null, "type": "CRS", "status": "Draft",
     "parentId": null, "modifiedBy": "alice", "modifiedAt": "2026-01-01T00:00:00Z"},
    {"id": "req-2-v1", "entityId": "req-2", "version": 1, "title": "Logout",
     "description": null, "type": "PRS", "status": "Draft",
     "parentId": 7, "modifiedBy": "alice", "modifiedAt": "2026-01-01T00:00:00Z"}
  ],
  "testCases": [
    {"id": "tc-1-v1", "entityId": "tc-1", "version": 1, "title": "Login works",
     "description": null, "steps": "Step1;Step2", "expectedResult": "Signed in",
     "modifiedBy": "carol", "modifiedAt": "2026-01-01T00:00:00Z"},
    {"id": "tc-1-v2", "entityId": "tc-1", "version": 2, "title": "Login works",
     "description": null, "steps": "Step1;Step2;Step3", "expectedResult": "Signed in",
     "modifiedBy": "carol", "modifiedAt": "2026-01-03T00:00:00Z"}
  ]
}"#;

fn write_history(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("history.json");
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_redline"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_versions_lists_entity_history_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);

    let output = run(&[
        "versions",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "requirement",
        "--entity",
        "req-1",
    ]);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let versions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = versions
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["req-1-v1", "req-1-v2"]);
    assert_eq!(versions[1]["modifiedBy"], "bob");
}

#[test]
fn test_show_prints_snapshot_json() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);

    let output = run(&[
        "show",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "test-case",
        "--id",
        "tc-1-v2",
    ]);

    assert!(output.status.success());
    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["entityId"], "tc-1");
    assert_eq!(snapshot["version"], 2);
    assert_eq!(snapshot["steps"], "Step1;Step2;Step3");
}

#[test]
fn test_diff_markdown_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);

    let output = run(&[
        "diff",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "requirement",
        "--old",
        "req-1-v1",
        "--new",
        "req-1-v2",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("## Requirement Redline"));
    assert!(stdout.contains("**Versions**: 1 → 2"));
    assert!(stdout.contains("| Description | Added | (none) | Users sign in with email |"));
    assert!(stdout.contains("| Status | Modified | Draft | Approved |"));
}

#[test]
fn test_diff_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);

    let output = run(&[
        "diff",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "test-case",
        "--old",
        "tc-1-v1",
        "--new",
        "tc-1-v2",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let redline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(redline["oldVersion"], 1);
    assert_eq!(redline["newVersion"], 2);
    let changes = redline["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["field"], "Steps");
    assert_eq!(changes[0]["changeType"], "Modified");
    assert_eq!(changes[0]["oldValue"], "Step1;Step2");
}

#[test]
fn test_diff_cross_entity_rejected_with_flag() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);
    let path = history.to_str().unwrap();

    let permissive = run(&[
        "diff", "--history", path, "--kind", "requirement", "--old", "req-1-v1", "--new",
        "req-2-v1",
    ]);
    assert!(permissive.status.success());

    let strict = run(&[
        "diff",
        "--history",
        path,
        "--kind",
        "requirement",
        "--old",
        "req-1-v1",
        "--new",
        "req-2-v1",
        "--reject-cross-entity",
    ]);
    assert_eq!(strict.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("Error: [ERR_INVALID_COMPARISON]"), "Stderr: {}", stderr);
}

#[test]
fn test_diff_unknown_snapshot_fails() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(&temp_dir, HISTORY);

    let output = run(&[
        "diff",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "requirement",
        "--old",
        "req-1-v1",
        "--new",
        "missing",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_NOT_FOUND]"), "Stderr: {}", stderr);
    assert!(stderr.contains("snapshot_id: missing"));
}

#[test]
fn test_history_with_version_gap_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let history = write_history(
        &temp_dir,
        r#"{"requirements": [
          {"id": "a", "entityId": "req-9", "version": 2, "title": "Gap",
           "description": null, "type": "SRS", "status": "Draft", "parentId": null,
           "modifiedBy": "x", "modifiedAt": "2026-01-01T00:00:00Z"}
        ]}"#,
    );

    let output = run(&[
        "versions",
        "--history",
        history.to_str().unwrap(),
        "--kind",
        "requirement",
        "--entity",
        "req-9",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Version conflict"));
}

#[test]
fn test_missing_history_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    let output = run(&[
        "show",
        "--history",
        missing.to_str().unwrap(),
        "--kind",
        "requirement",
        "--id",
        "x",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: cannot read"));
}
