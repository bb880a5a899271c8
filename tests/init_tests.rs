//! Integration tests for init and show commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::flier_cmd;

#[test]
fn test_init_creates_document() {
    let temp = TempDir::new().unwrap();

    flier_cmd().arg("init").arg(temp.path()).assert().success();

    let doc_path = temp.path().join("flier.toml");
    assert!(doc_path.exists());

    let content = fs::read_to_string(doc_path).unwrap();
    assert!(content.contains("title = \"WEEKLY SCHEDULE!\""));
    assert!(content.contains("subtitle = \"UNITED VISIONARY\""));
    assert!(content.contains("header_color = \"#1e293b\""));
    assert!(content.contains("label = \"500/2500\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    flier_cmd().arg("init").arg(temp.path()).assert().success();

    flier_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already a flier directory"));
}

#[test]
fn test_show_without_document_fails() {
    let temp = TempDir::new().unwrap();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a flier directory"));
}

#[test]
fn test_show_lists_default_flyer() {
    let temp = TempDir::new().unwrap();

    flier_cmd().arg("init").arg(temp.path()).assert().success();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEKLY SCHEDULE!"))
        .stdout(predicate::str::contains("MONDAY"))
        .stdout(predicate::str::contains("POWER HOUR"))
        .stdout(predicate::str::contains("Progress: 500/2500 (20%)"));
}

#[test]
fn test_show_rejects_truncated_document() {
    let temp = TempDir::new().unwrap();

    flier_cmd().arg("init").arg(temp.path()).assert().success();

    // Hand-edit the document down to a single day block
    let doc_path = temp.path().join("flier.toml");
    let content = fs::read_to_string(&doc_path).unwrap();
    let first_day = content.find("[[days]]").unwrap();
    let second_day = content[first_day + 1..].find("[[days]]").unwrap() + first_day + 1;
    let truncated = format!(
        "{}{}",
        &content[..second_day],
        &content[content.find("[right_panel]").unwrap()..]
    );
    fs::write(&doc_path, truncated).unwrap();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 7 day blocks, found 1"));

    flier_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-03-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 7 day blocks"));
}

#[test]
fn test_commands_work_from_subdirectory() {
    let temp = TempDir::new().unwrap();

    flier_cmd().arg("init").arg(temp.path()).assert().success();

    let nested = temp.path().join("assets");
    fs::create_dir(&nested).unwrap();

    flier_cmd()
        .current_dir(&nested)
        .arg("get")
        .arg("title")
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEKLY SCHEDULE!"));
}
