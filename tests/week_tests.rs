//! Integration tests for week selection

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::flier_cmd;

fn init_flyer() -> TempDir {
    let temp = TempDir::new().unwrap();
    flier_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_week_from_sunday() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week starts 2024-03-03"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUNDAY     3/3"))
        .stdout(predicate::str::contains("MONDAY     3/4"))
        .stdout(predicate::str::contains("SATURDAY   3/9"));
}

#[test]
fn test_week_snaps_midweek_date_to_sunday() {
    let temp = init_flyer();

    // Wednesday, March 6, 2024
    flier_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-03-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week starts 2024-03-03"));
}

#[test]
fn test_week_preserves_events() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["week", "2024-03-03"])
        .assert()
        .success();

    // Seeded events still on their slots after derivation
    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("POWER HOUR"))
        .stdout(predicate::str::contains("GAME NIGHT"))
        .stdout(predicate::str::contains("REST & RESET"));
}

#[test]
fn test_invalid_week_date_keeps_document() {
    let temp = init_flyer();
    let before = fs::read_to_string(temp.path().join("flier.toml")).unwrap();

    flier_cmd()
        .current_dir(temp.path())
        .args(["week", "03/06/2024"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    let after = fs::read_to_string(temp.path().join("flier.toml")).unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_init_does_not_derive_week() {
    let temp = init_flyer();

    // The seeded flyer starts on MONDAY 2/24; nothing may rewrite it
    // until the user explicitly selects a week
    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("MONDAY     2/24"));

    flier_cmd()
        .current_dir(temp.path())
        .args(["set", "title", "NO DERIVATION PLEASE"])
        .assert()
        .success();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("MONDAY     2/24"));
}
