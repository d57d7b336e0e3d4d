//! End-to-end tests for the grade_recorder CLI.
//!
//! Each test runs the binary in its own temporary directory so the default
//! results log and the rolling log file land in scratch space.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn grade_recorder() -> Command {
    Command::cargo_bin("grade_recorder").expect("binary should build")
}

#[test]
fn test_help_lists_subcommands() {
    grade_recorder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grade_recorder"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_submit_prints_grade_and_appends() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "95", "", "70", "--name", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann's grade: A"));

    let content = fs::read_to_string(dir.path().join("grades.txt")).unwrap();
    assert_eq!(content, "Ann\t95\t0\t70\t0\t95\n");
}

#[test]
fn test_submit_without_scores_records_zero_row() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "--name", "Bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bo's grade: F"));

    let content = fs::read_to_string(dir.path().join("grades.txt")).unwrap();
    assert_eq!(content, "Bo\t0\t0\t0\t0\t0\n");
}

#[test]
fn test_submit_json_flag_prints_record() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "88", "--name", "Cy", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cy's grade: B"))
        .stdout(predicate::str::contains("\"final_score\": 88"))
        .stdout(predicate::str::contains("\"grade\": \"B\""));
}

#[test]
fn test_submit_rejects_non_number_and_writes_nothing() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "50", "abc", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score 2"))
        .stderr(predicate::str::contains("not a number"));

    assert!(!dir.path().join("grades.txt").exists());
}

#[test]
fn test_submit_stops_at_first_bad_entry() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "50", "", "101", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score 3"))
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_submit_rejects_negative_score() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "--name", "Ann", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score 1"))
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_export_writes_csv_row() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("class.csv");

    grade_recorder()
        .current_dir(dir.path())
        .args([
            "export",
            "90",
            "oops",
            "--name",
            "Bo",
            "--output",
            target.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&target).unwrap();
    assert_eq!(content, "Bo,90,0,0,0,90\n");
}

#[test]
fn test_export_rejects_non_csv_target() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("notes.txt");

    grade_recorder()
        .current_dir(dir.path())
        .args(["export", "90", "--name", "Bo", "--output", target.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".csv"));

    assert!(!target.exists());
}

#[test]
fn test_summary_over_recorded_submissions() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "95", "--name", "Ann"])
        .assert()
        .success();
    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "55", "--name", "Bo"])
        .assert()
        .success();

    grade_recorder()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("records: 2"))
        .stdout(predicate::str::contains("students: 2"))
        .stdout(predicate::str::contains("A=1"))
        .stdout(predicate::str::contains("F=1"));
}

#[test]
fn test_summary_comma_over_exported_rows() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("class.csv");

    grade_recorder()
        .current_dir(dir.path())
        .args([
            "export",
            "95",
            "--name",
            "Ann",
            "--output",
            target.to_str().unwrap(),
        ])
        .assert()
        .success();
    grade_recorder()
        .current_dir(dir.path())
        .args([
            "export",
            "55",
            "--name",
            "Bo",
            "--output",
            target.to_str().unwrap(),
        ])
        .assert()
        .success();

    grade_recorder()
        .current_dir(dir.path())
        .args(["summary", target.to_str().unwrap(), "--comma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records: 2"))
        .stdout(predicate::str::contains("students: 2"))
        .stdout(predicate::str::contains("A=1"))
        .stdout(predicate::str::contains("F=1"));
}

#[test]
fn test_summary_json_output() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["submit", "72", "--name", "Ann"])
        .assert()
        .success();

    grade_recorder()
        .current_dir(dir.path())
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records\": 1"))
        .stdout(predicate::str::contains("\"max_final\": 72"));
}

#[test]
fn test_summary_missing_file_fails() {
    let dir = tempdir().unwrap();

    grade_recorder()
        .current_dir(dir.path())
        .args(["summary", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}
