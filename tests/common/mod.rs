//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a shaftkit command
pub fn shaftkit() -> Command {
    Command::new(cargo::cargo_bin!("shaftkit"))
}

/// Helper to create a document in a temp directory
pub fn setup_document(overall_length: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    shaftkit()
        .current_dir(tmp.path())
        .args(["new", "--overall-length", overall_length])
        .assert()
        .success();
    tmp
}

/// Helper to add a body; returns the created full entity id
pub fn add_body(tmp: &TempDir, start: &str, len: &str, dia: &str) -> String {
    let output = shaftkit()
        .current_dir(tmp.path())
        .args(["add", "body", "--start", start, "--len", len, "--dia", dia])
        .output()
        .unwrap();
    extract_id(&output.stdout, "BODY-")
}

/// Helper to add a liner
pub fn add_liner(tmp: &TempDir, start: &str, len: &str, od: &str) -> String {
    let output = shaftkit()
        .current_dir(tmp.path())
        .args(["add", "liner", "--start", start, "--len", len, "--od", od])
        .output()
        .unwrap();
    extract_id(&output.stdout, "LNR-")
}

/// Helper to add an excluded end thread
pub fn add_excluded_thread(tmp: &TempDir, start: &str, len: &str) -> String {
    let output = shaftkit()
        .current_dir(tmp.path())
        .args([
            "add",
            "thread",
            "--start",
            start,
            "--len",
            len,
            "--dia",
            "30",
            "--pitch",
            "2",
            "--exclude-from-oal",
        ])
        .output()
        .unwrap();
    extract_id(&output.stdout, "THD-")
}

/// Pull the first full entity id with the given prefix out of command output
pub fn extract_id(stdout: &[u8], prefix: &str) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    stdout
        .split_whitespace()
        .find(|w| w.starts_with(prefix) && !w.ends_with("..."))
        .map(|s| s.to_string())
        .unwrap_or_default()
}
