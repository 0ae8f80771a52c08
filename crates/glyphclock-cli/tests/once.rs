use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const AT: &str = "2026-10-19T09:41:07+01:00";

#[test]
fn test_once_prints_every_slot() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .args(["once", "--at", AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("#####"))
        .stdout(predicate::str::contains(
            "📅 Monday, October 19, 2026 • Week 43",
        ))
        .stdout(predicate::str::contains("🗽 New York 04:41"))
        .stdout(predicate::str::contains("🏰 London   09:41"))
        .stdout(predicate::str::contains("🗾 Tokyo    17:41"))
        .stdout(predicate::str::contains("Theme: NEON | Format: 24H | Uptime: 00:00:00"));
}

#[test]
fn test_once_respects_display_flags() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .args(["--theme", "matrix", "--twelve-hour", "once", "--at", AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: MATRIX | Format: 12H"));
}

#[test]
fn test_once_reads_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "theme = \"cyberpunk\"\ntime_format = 12\n",
    )
    .unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .args(["once", "--at", AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: CYBERPUNK | Format: 12H"));
}

#[test]
fn test_once_rejects_bad_instant() {
    cargo_bin_cmd!("glyphclock")
        .args(["once", "--at", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RFC 3339 time"));
}

#[test]
fn test_once_writes_log_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .args(["once", "--at", AT])
        .assert()
        .success();

    assert!(dir.path().join("logs").join("glyphclock.log").exists());
}

#[test]
fn test_once_names_tz_variable_zone() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .env("TZ", "Asia/Tokyo")
        .args(["once", "--no-seconds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Asia/Tokyo\n"));
}

#[test]
fn test_once_at_labels_its_own_offset() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("glyphclock")
        .env("GLYPHCLOCK_HOME", dir.path())
        .env("TZ", "Asia/Tokyo")
        .args(["once", "--at", "2026-10-19T09:41:07-04:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| UTC-04:00\n"))
        .stdout(predicate::str::contains("🗽 New York 09:41"));
}
