//! Integration tests for day, event and guest editing

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::flier_cmd;

fn init_flyer() -> TempDir {
    let temp = TempDir::new().unwrap();
    flier_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_event_add_by_day_name() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args([
            "event", "add", "thursday", "--title", "TOWN HALL", "--time", "6:00PM",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'TOWN HALL' to THURSDAY"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOWN HALL  6:00PM"));
}

#[test]
fn test_event_add_optional_by_position() {
    let temp = init_flyer();

    // Position 3 of the seeded flyer is WEDNESDAY
    flier_cmd()
        .current_dir(temp.path())
        .args(["event", "add", "3", "--title", "OPEN MIC", "--optional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WEDNESDAY"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("OPEN MIC  [optional]"));
}

#[test]
fn test_event_remove() {
    let temp = init_flyer();

    // TUESDAY starts with two events; drop the first
    flier_cmd()
        .current_dir(temp.path())
        .args(["event", "remove", "tuesday", "1"])
        .assert()
        .success();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("BRAINSTORM SESH").not())
        .stdout(predicate::str::contains("GAME NIGHT"));
}

#[test]
fn test_event_remove_out_of_range() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["event", "remove", "monday", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No event 5 on MONDAY"));
}

#[test]
fn test_event_optional_toggle() {
    let temp = init_flyer();

    // POWER HOUR on MONDAY is seeded optional; unmark it
    flier_cmd()
        .current_dir(temp.path())
        .args(["event", "optional", "monday", "1", "--off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no longer optional"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[optional]").not());
}

#[test]
fn test_unknown_day_fails() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["event", "add", "someday", "--title", "X"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown day: 'someday'"));
}

#[test]
fn test_day_color_set_and_clear() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["day", "color", "friday", "#ff0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set FRIDAY header color"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("FRIDAY     2/28  [#ff0000]"));

    flier_cmd()
        .current_dir(temp.path())
        .args(["day", "color", "friday", "--clear"])
        .assert()
        .success();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[#ff0000]").not());
}

#[test]
fn test_day_color_invalid_rejected() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["day", "color", "friday", "#ff00"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn test_guest_set_and_clear() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args([
            "guest",
            "set",
            "saturday",
            "--text",
            "WITH @DJ NOVA",
            "--shape",
            "triangle",
            "--color",
            "#a855f7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set special guest on SATURDAY"));

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("WITH @DJ NOVA (triangle, #a855f7)"));

    flier_cmd()
        .current_dir(temp.path())
        .args(["guest", "clear", "saturday"])
        .assert()
        .success();

    flier_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("@DJ NOVA").not());
}

#[test]
fn test_guest_invalid_shape() {
    let temp = init_flyer();

    flier_cmd()
        .current_dir(temp.path())
        .args(["guest", "set", "monday", "--text", "X", "--shape", "hexagon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shape"));
}
