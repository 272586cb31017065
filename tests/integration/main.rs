//! Integration tests for the idxstrip CLI
//!
//! These tests run the real binary against SQL files on disk.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create an idxstrip command
fn idxstrip() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("idxstrip"))
}

/// Helper to write a SQL file into a temp dir
fn write_sql(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("migration.sql");
    fs::write(&path, content).expect("Failed to write SQL file");
    path
}

const MIGRATION: &str = "\
CREATE TABLE `users` (`id` INT, `email2` VARCHAR(255));
CREATE INDEX `idx_email2` ON users (email2);
ALTER TABLE `users` RENAME INDEX `idx_email2` TO `idx_mail7`;
CREATE INDEX `idx_1` ON users (id);
DROP INDEX `idx_mail7` ON users;
SELECT * FROM `table123`;";

const EXPECTED: &str = "\
CREATE TABLE `users` (`id` INT, `email2` VARCHAR(255));
CREATE INDEX `idx_email` ON users (email2);
ALTER TABLE `users` RENAME INDEX `idx_email` TO `idx_mail`;
CREATE INDEX `idx_1` ON users (id);
DROP INDEX `idx_mail` ON users;
SELECT * FROM `table123`;
";

// =============================================================================
// Success
// =============================================================================

#[test]
fn test_rewrites_migration_to_stdout() {
    let temp = TempDir::new().unwrap();
    let path = write_sql(&temp, MIGRATION);

    idxstrip().arg(&path).assert().success().stdout(EXPECTED);

    // Input file is never modified
    assert_eq!(fs::read_to_string(&path).unwrap(), MIGRATION);
}

#[test]
fn test_extra_arguments_ignored() {
    let temp = TempDir::new().unwrap();
    let path = write_sql(&temp, "DROP INDEX `myindex9`;");

    idxstrip()
        .arg(&path)
        .args(["second.sql", "third.sql"])
        .assert()
        .success()
        .stdout("DROP INDEX `myindex`;\n");
}

#[test]
fn test_non_utf8_bytes_do_not_abort() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.sql");
    fs::write(&path, b"-- r\xe9sum\xe9\nCREATE INDEX `idx_name1` ON t (c);").unwrap();

    idxstrip()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE INDEX `idx_name` ON t (c);"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_sql(&temp, MIGRATION);

    let output = idxstrip().arg("--json").arg(&path).assert().success().get_output().clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["lines"], 6);
    assert_eq!(json["index_lines"], 4);
    assert_eq!(json["rewritten_lines"], 3);
    assert_eq!(json["sql"], EXPECTED.trim_end_matches('\n'));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let path = write_sql(&temp, "DROP INDEX `a1`;");

    idxstrip()
        .arg("-v")
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("DROP INDEX `a`;\n")
        .stderr(predicate::str::contains("index-related"))
        .stderr(predicate::str::contains("Line 1: DROP INDEX"));
}

#[test]
fn test_version() {
    idxstrip()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("idxstrip"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_argument_is_usage_error() {
    idxstrip()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: idxstrip <sql-file>"));
}

#[test]
fn test_missing_file_fails_without_output() {
    let temp = TempDir::new().unwrap();

    idxstrip()
        .arg(temp.path().join("nope.sql"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_directory_is_read_error() {
    let temp = TempDir::new().unwrap();

    idxstrip()
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
