// tests/cli.rs
//
// End-to-end through the binary, offline stages only.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn workspace() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let lists = tmp.path().join("lists");
    fs::create_dir_all(&lists).unwrap();
    fs::write(lists.join("2015.txt"), "Darbo partija\n1. Jonas Jonaitis\n2. Ona Onaitė\n").unwrap();
    fs::write(
        lists.join("2019.txt"),
        "Nr. 4. Darbo partija\n1. Ona Onaitė\n2. Jonas Jonaitis\n",
    )
    .unwrap();
    tmp
}

fn bin(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("council_lists").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn transform_then_report() {
    let tmp = workspace();

    bin(tmp.path())
        .args(["--years", "2015,2019", "transform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2015: 1 lists, 2 members"))
        .stdout(predicate::str::contains("2019: 1 lists, 2 members"));

    let json = fs::read_to_string(tmp.path().join("transformed-data").join("2019.json")).unwrap();
    assert!(json.contains("\"listNames\""));
    assert!(json.contains("\"number\": 4"));

    bin(tmp.path())
        .args(["--years", "2015,2019", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote report.html"));

    let html = fs::read_to_string(tmp.path().join("report.html")).unwrap();
    assert!(html.contains("<th>2015</th>"));
    assert!(html.contains("DARBO PARTIJA (-1)"));
}

#[test]
fn missing_single_year_fails() {
    let tmp = workspace();
    bin(tmp.path())
        .args(["transform", "--year", "2011"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2011.txt"));
}

#[test]
fn format_override_and_config_file() {
    let tmp = workspace();
    fs::write(tmp.path().join("council_lists.conf"), "out_dir = out\nyears = 2015\n").unwrap();

    bin(tmp.path())
        .args(["transform", "--format", "plain"])
        .assert()
        .success();
    assert!(tmp.path().join("out").join("2015.json").exists());
    assert!(!tmp.path().join("out").join("2019.json").exists());

    bin(tmp.path())
        .args(["transform", "--format", "tabular"])
        .assert()
        .failure();
}

#[test]
fn log_file_setting_is_honoured() {
    let tmp = workspace();
    fs::write(tmp.path().join("council_lists.conf"), "log_file = mylogs/run.log\nyears = 2015\n").unwrap();

    bin(tmp.path()).args(["transform"]).assert().success();

    let log = fs::read_to_string(tmp.path().join("mylogs").join("run.log")).unwrap();
    assert!(log.contains("[INFO] Loaded config from council_lists.conf"), "{log}");
    assert!(log.contains("[INFO] Transforming"), "{log}");
    assert!(!log.contains("[DEBUG]"), "{log}");
    assert!(!tmp.path().join(".store").exists());
}

#[test]
fn verbose_adds_debug_lines() {
    let tmp = workspace();
    bin(tmp.path()).args(["-v", "--years", "2015", "transform"]).assert().success();

    let log = fs::read_to_string(tmp.path().join(".store").join("debug.log")).unwrap();
    assert!(log.contains("[DEBUG] Settings:"), "{log}");
    assert!(log.contains("[INFO] Transforming"), "{log}");
}

#[test]
fn warnings_are_echoed_to_stderr() {
    let tmp = workspace();
    // 2011 has no list file: bulk transform skips it with a warning
    bin(tmp.path())
        .args(["--years", "2011,2015", "transform"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] Skipping 2011"));

    let log = fs::read_to_string(tmp.path().join(".store").join("debug.log")).unwrap();
    assert!(log.contains("[WARN] Skipping 2011"), "{log}");
}
