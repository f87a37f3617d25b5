//! End-to-end tests for the `hatch` binary against a temporary save file.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HATCHED_AT: &str = "2024-06-01T08:00:00Z";
const LONG_AFTER: &str = "2030-01-01T00:00:00Z";

fn save_file(dir: &TempDir) -> PathBuf {
    dir.path().join("character.json")
}

/// A `hatch` command pinned to a save file in `dir`, a fixed seed and the
/// clock frozen at `at`.
fn hatch_at(dir: &TempDir, at: &str) -> Command {
    let mut cmd = Command::cargo_bin("hatch").unwrap();
    cmd.env_remove("HATCH_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(save_file(dir))
        .args(["--seed", "7", "--at", at]);
    cmd
}

fn hatch(dir: &TempDir) -> Command {
    hatch_at(dir, HATCHED_AT)
}

/// A temp directory that already holds a freshly hatched character.
fn hatched() -> TempDir {
    let dir = TempDir::new().unwrap();
    hatch(&dir).arg("new").assert().success();
    dir
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_save_file() {
    let dir = TempDir::new().unwrap();
    hatch(&dir)
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hatched"))
        .stdout(predicate::str::contains("childhood"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(save_file(&dir)).unwrap()).unwrap();
    assert_eq!(saved["hit_point"], 10);
    assert_eq!(saved["growth_stage"], "childhood");
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = hatched();
    hatch(&dir)
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    hatch(&dir).args(["new", "--force"]).assert().success();
}

#[test]
fn save_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("pet.json");
    Command::cargo_bin("hatch")
        .unwrap()
        .env("HATCH_FILE", &path)
        .args(["--seed", "1", "new"])
        .assert()
        .success();
    assert!(path.exists());
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_without_character_fails() {
    let dir = TempDir::new().unwrap();
    hatch(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: no character found"));
}

#[test]
fn status_shows_stats() {
    let dir = hatched();
    hatch(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hit points"))
        .stdout(predicate::str::contains("Favorability"))
        .stdout(predicate::str::contains("never"));
}

#[test]
fn status_json() {
    let dir = hatched();
    let output = hatch(&dir).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dead"], false);
    assert_eq!(report["death_cause"], serde_json::Value::Null);
    assert_eq!(report["character"]["max_hit_point"], 10);
    let days = report["remaining_days"].as_i64().unwrap();
    assert!((14..=27).contains(&days));
}

#[test]
fn status_reports_death_after_lifespan() {
    let dir = hatched();
    let output = hatch_at(&dir, LONG_AFTER)
        .args(["status", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dead"], true);
    assert_eq!(report["death_cause"], "lifespan");

    hatch_at(&dir, LONG_AFTER)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEAD"))
        .stdout(predicate::str::contains("hatch restart"));
}

// ---------------------------------------------------------------------------
// care actions
// ---------------------------------------------------------------------------

#[test]
fn feed_twice_hits_cooldown() {
    let dir = hatched();
    hatch(&dir)
        .arg("feed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recovered 0 hp (10/10)"));
    hatch(&dir)
        .arg("feed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Still full"));
}

#[test]
fn play_and_clean() {
    let dir = hatched();
    hatch(&dir)
        .args(["play", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorability is now 10/10"));
    hatch(&dir)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Living environment is now 10/10"));
}

#[test]
fn dead_character_cannot_be_fed() {
    let dir = hatched();
    hatch_at(&dir, LONG_AFTER)
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has died"));
}

// ---------------------------------------------------------------------------
// tick
// ---------------------------------------------------------------------------

#[test]
fn tick_once_lowers_stats() {
    let dir = hatched();
    hatch(&dir).arg("tick").assert().success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(save_file(&dir)).unwrap()).unwrap();
    let environment = saved["living_environment"].as_u64().unwrap();
    assert!(environment < 10);
}

#[test]
fn neglect_ends_in_death() {
    let dir = hatched();
    hatch(&dir)
        .args(["tick", "--count", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The character died"));

    hatch(&dir)
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ran out of hit points"));
}

// ---------------------------------------------------------------------------
// restart
// ---------------------------------------------------------------------------

#[test]
fn restart_requires_death_unless_forced() {
    let dir = hatched();
    hatch(&dir)
        .arg("restart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("still alive"));
    hatch(&dir).args(["restart", "--force"]).assert().success();
}

#[test]
fn restart_after_death() {
    let dir = hatched();
    hatch_at(&dir, LONG_AFTER)
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restarted."));

    let output = hatch_at(&dir, LONG_AFTER)
        .args(["status", "--json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dead"], false);
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_stops_after_tick_budget() {
    let dir = hatched();
    let config = dir.path().join("gentle.json");
    fs::write(&config, r#"{ "decay": [1, 1] }"#).unwrap();

    hatch(&dir)
        .arg("--config")
        .arg(&config)
        .args(["run", "--ticks", "3", "--interval-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Caring for"))
        .stdout(predicate::str::contains("Stopped after 3 tick(s)"));
}

#[test]
fn run_verbose_prints_events() {
    let dir = hatched();
    let config = dir.path().join("gentle.json");
    fs::write(&config, r#"{ "decay": [1, 1] }"#).unwrap();

    hatch(&dir)
        .arg("--config")
        .arg(&config)
        .args(["run", "--ticks", "1", "--interval-ms", "1", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lost 1 from every stat"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, r#"{ "decay": [5, 1] }"#).unwrap();

    hatch(&dir)
        .arg("--config")
        .arg(&config)
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn oversized_lifespan_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("forever.json");
    fs::write(&config, r#"{ "lifespan_days": [200000000, 200000000] }"#).unwrap();

    hatch(&dir)
        .arg("--config")
        .arg(&config)
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lifespan_days"));
    assert!(!save_file(&dir).exists());
}
