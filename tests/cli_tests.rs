//! CLI integration tests - document lifecycle, component commands, output

mod common;

use common::{add_body, add_excluded_thread, add_liner, setup_document, shaftkit};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Document lifecycle
// ============================================================================

#[test]
fn test_new_creates_document() {
    let tmp = setup_document("120");
    let content = fs::read_to_string(tmp.path().join("shaft.json")).unwrap();
    assert!(content.contains("\"version\": 1"));
    assert!(content.contains("\"overall_length_mm\": 120.0"));
}

#[test]
fn test_new_refuses_overwrite_without_force() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["new", "--overall-length", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    shaftkit()
        .current_dir(tmp.path())
        .args(["new", "--overall-length", "50", "--force"])
        .assert()
        .success();
}

#[test]
fn test_commands_fail_without_document() {
    let tmp = tempfile::TempDir::new().unwrap();
    shaftkit()
        .current_dir(tmp.path())
        .args(["list"])
        .assert()
        .failure();
}

#[test]
fn test_set_length_updates_document() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["set-length", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150"));

    let content = fs::read_to_string(tmp.path().join("shaft.json")).unwrap();
    assert!(content.contains("\"overall_length_mm\": 150.0"));
}

#[test]
fn test_inch_document_converts_on_entry() {
    let tmp = tempfile::TempDir::new().unwrap();
    shaftkit()
        .current_dir(tmp.path())
        .args(["new", "--overall-length", "10", "--unit", "in"])
        .assert()
        .success();

    let content = fs::read_to_string(tmp.path().join("shaft.json")).unwrap();
    // 10 inches stored as millimeters
    assert!(content.contains("\"overall_length_mm\": 254.0"));
    assert!(content.contains("\"preferred_unit\": \"inch\""));
}

#[test]
fn test_set_unit_lock_blocks_switch() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["set-unit", "mm", "--lock"])
        .assert()
        .success();
    shaftkit()
        .current_dir(tmp.path())
        .args(["set-unit", "in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));
}

// ============================================================================
// Component commands
// ============================================================================

#[test]
fn test_add_body_and_list() {
    let tmp = setup_document("120");
    let id = add_body(&tmp, "0", "40", "50");
    assert!(id.starts_with("BODY-"));

    shaftkit()
        .current_dir(tmp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BODY@1"))
        .stdout(predicate::str::contains("1 component(s)"));
}

#[test]
fn test_list_empty_document() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components found"));
}

#[test]
fn test_add_thread_requires_pitch_or_tpi() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["add", "thread", "--start", "0", "--len", "10", "--dia", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pitch or --tpi"));
}

#[test]
fn test_add_taper_requires_position() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args([
            "add", "taper", "--len", "12", "--start-dia", "55", "--end-dia", "44",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start or --start-from-fwd"));
}

#[test]
fn test_rm_by_positional_reference() {
    let tmp = setup_document("120");
    add_body(&tmp, "0", "40", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["rm", "BODY@1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    shaftkit()
        .current_dir(tmp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components found"));
}

#[test]
fn test_rm_by_full_id() {
    let tmp = setup_document("120");
    let id = add_body(&tmp, "0", "40", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["rm", &id])
        .assert()
        .success();
}

#[test]
fn test_rm_unknown_reference_fails() {
    let tmp = setup_document("120");
    shaftkit()
        .current_dir(tmp.path())
        .args(["rm", "BODY@7"])
        .assert()
        .failure();
}

// ============================================================================
// Resolution output
// ============================================================================

#[test]
fn test_resolve_shows_auto_fillers() {
    let tmp = setup_document("120");
    add_liner(&tmp, "0", "20", "60");
    add_liner(&tmp, "80", "10", "60");

    shaftkit()
        .current_dir(tmp.path())
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::contains("OAL window: 0 .. 120 mm"));
}

#[test]
fn test_resolve_window_narrows_for_excluded_thread() {
    let tmp = setup_document("100");
    add_excluded_thread(&tmp, "0", "10");

    shaftkit()
        .current_dir(tmp.path())
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OAL window: 10 .. 100 mm"));
}

#[test]
fn test_resolve_json_format() {
    let tmp = setup_document("120");
    add_body(&tmp, "0", "40", "50");

    let output = shaftkit()
        .current_dir(tmp.path())
        .args(["resolve", "--format", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let components = parsed["components"].as_array().unwrap();
    // one explicit body plus one auto filler
    assert_eq!(components.len(), 2);
}

#[test]
fn test_resolution_is_read_only() {
    let tmp = setup_document("120");
    add_liner(&tmp, "0", "20", "60");
    let before = fs::read_to_string(tmp.path().join("shaft.json")).unwrap();

    shaftkit().current_dir(tmp.path()).args(["resolve"]).assert().success();
    shaftkit().current_dir(tmp.path()).args(["draw"]).assert().success();

    let after = fs::read_to_string(tmp.path().join("shaft.json")).unwrap();
    assert_eq!(before, after);
}

// ============================================================================
// Draw / export / validate
// ============================================================================

#[test]
fn test_draw_renders_oal_rail() {
    let tmp = setup_document("120");
    add_body(&tmp, "20", "40", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["draw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OAL 120 mm"));
}

#[test]
fn test_export_svg_writes_file() {
    let tmp = setup_document("120");
    add_body(&tmp, "0", "40", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["export", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let svg = fs::read_to_string(tmp.path().join("shaft.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("OAL 120 mm"));
}

#[test]
fn test_validate_clean_document() {
    let tmp = setup_document("120");
    add_body(&tmp, "0", "40", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("document is valid"));
}

#[test]
fn test_validate_warns_past_end() {
    let tmp = setup_document("100");
    add_body(&tmp, "90", "20", "50");
    shaftkit()
        .current_dir(tmp.path())
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("past the shaft end"));

    // strict mode turns the warning into a failure
    shaftkit()
        .current_dir(tmp.path())
        .args(["validate", "--strict"])
        .assert()
        .failure();
}

#[test]
fn test_completions_generate() {
    shaftkit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shaftkit"));
}
