use assert_cmd::Command;
use predicates::prelude::*;

fn lumen() -> Command {
    Command::cargo_bin("lumen").expect("binary built")
}

#[test]
fn test_ratio_black_on_white() {
    lumen()
        .args(["ratio", "#000000", "#FFFFFF"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21.00"))
        .stdout(predicate::str::contains("AAA"));
}

#[test]
fn test_ratio_rejects_malformed_color() {
    lumen()
        .args(["ratio", "#000000", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color: nope"));
}

#[test]
fn test_ratio_json_output() {
    lumen()
        .args(["ratio", "#000000", "#FFFFFF", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ratio\": 21.0"))
        .stdout(predicate::str::contains("\"aaLarge\": true"));
}

#[test]
fn test_check_reports_summary() {
    lumen()
        .args(["check", "#FF0000", "#00FF00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pairs: 6"));
}

#[test]
fn test_check_without_black_white() {
    lumen()
        .args(["check", "#FF0000", "#00FF00", "--no-black-white"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pairs: 2"));
}

#[test]
fn test_check_with_no_valid_colors() {
    lumen()
        .args(["check", "not-a-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid colors"));
}

#[test]
fn test_suggest_reaches_target() {
    lumen()
        .args(["suggest", "#FFFFFF", "#999999", "--target", "aa-large"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AA Large"));
}

#[test]
fn test_suggest_json_keeps_unadjusted_color() {
    lumen()
        .args(["suggest", "#FFFFFF", "#999999", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestedColor1\": \"#FFFFFF\""));
}
