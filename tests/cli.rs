//! Binary-level tests: argument handling, config precedence, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use std::fs;
use tempfile::TempDir;

const SESSION: &str = r#"{"chunkedPrompt":{"chunks":[
    {"text":"Test 1","isThought":false},
    {"text":"hidden reasoning","isThought":true},
    {"text":"Test 2","isThought":false}
]}}"#;

fn cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aistudio-chat-export").unwrap();
    // Isolate from any config.toml on the host.
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_session(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("session.json");
    fs::write(&path, SESSION).unwrap();
    path
}

#[test]
fn exports_text_by_default() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);
    let output = dir.path().join("out.txt");

    cmd(&config_home)
        .arg("export")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("format: txt"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Test 1\n---\nTest 2");
}

#[test]
fn exports_sqlite_with_db_alias() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);
    let output = dir.path().join("chunks.db");

    cmd(&config_home)
        .arg("export")
        .arg(&input)
        .arg(&output)
        .args(["--format", "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format: sqlite"));

    let conn = Connection::open(&output).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM chunk_records", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn quiet_suppresses_success_message() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);
    let output = dir.path().join("out.txt");

    cmd(&config_home)
        .arg("--quiet")
        .arg("export")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_sets_default_format() {
    let config_home = TempDir::new().unwrap();
    let cfg_dir = config_home.path().join("aistudio-chat-export");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "format = \"sqlite\"\n").unwrap();

    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);
    let output = dir.path().join("chunks.db");

    cmd(&config_home)
        .arg("export")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("format: sqlite"));

    assert!(Connection::open(&output).is_ok());
}

#[test]
fn rejects_unsupported_format() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);

    cmd(&config_home)
        .arg("export")
        .arg(&input)
        .arg(dir.path().join("out.yaml"))
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format: yaml"));
}

#[test]
fn missing_input_fails_with_message() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    cmd(&config_home)
        .arg("export")
        .arg("/nonexistent/session.json")
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export"));
}

#[test]
fn directory_destination_fails_cleanly() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);

    cmd(&config_home)
        .arg("export")
        .arg(&input)
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let config_home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = write_session(&dir);

    cmd(&config_home)
        .args(["--config", "/nonexistent/config.toml"])
        .arg("export")
        .arg(&input)
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
