//! Integration tests for the sql-review binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("sql-review");
    cmd.env_remove("SQL_REVIEW_ENGINE")
        .env_remove("SQL_REVIEW_CONFIG")
        .env_remove("SQL_REVIEW_CHARSET")
        .env_remove("SQL_REVIEW_COLLATION");
    cmd
}

fn config_file() -> NamedTempFile {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        r#"
engine = "mysql"

[[rules]]
type = "column.require-default"
level = "WARNING"

[[rules]]
type = "statement.affected-row-limit"
level = "ERROR"
payload = '{{"number": 100}}'
"#
    )
    .unwrap();
    config
}

fn sql_file(sql: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sql).unwrap();
    file
}

#[test]
fn test_check_clean_exits_zero() {
    let config = config_file();
    let sql = sql_file("CREATE TABLE t(a int default 0);\nUPDATE t SET a = 1 WHERE a = 2;");

    cmd()
        .args([
            "check",
            "-s",
            sql.path().to_str().unwrap(),
            "-c",
            config.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No issues found (2 rules checked)"));
}

#[test]
fn test_check_warning_exits_one() {
    let config = config_file();
    let sql = sql_file("CREATE TABLE t(a int);");

    cmd()
        .args([
            "check",
            "-s",
            sql.path().to_str().unwrap(),
            "-c",
            config.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Column `t`.`a` doesn't have DEFAULT."));
}

#[test]
fn test_check_error_exits_two() {
    let config = config_file();
    let sql = sql_file("DELETE FROM t;");

    cmd()
        .args([
            "check",
            "-s",
            sql.path().to_str().unwrap(),
            "-c",
            config.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("statement.affected-row-limit"));
}

#[test]
fn test_check_from_stdin_json() {
    let config = config_file();

    cmd()
        .args([
            "check",
            "-s",
            "-",
            "-c",
            config.path().to_str().unwrap(),
            "-f",
            "json"
        ])
        .write_stdin("CREATE TABLE t(\n  a int\n);")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"line\": 2"));
}

#[test]
fn test_check_unsupported_engine_fails() {
    let config = config_file();
    let sql = sql_file("CREATE TABLE t(a int);");

    cmd()
        .args([
            "check",
            "-s",
            sql.path().to_str().unwrap(),
            "-c",
            config.path().to_str().unwrap(),
            "-e",
            "postgres"
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_missing_sql_file() {
    let config = config_file();

    cmd()
        .args([
            "check",
            "-s",
            "/nonexistent/review.sql",
            "-c",
            config.path().to_str().unwrap()
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_rules_lists_registered_pairs() {
    cmd()
        .args(["rules", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("column.require-default"))
        .stdout(predicate::str::contains("postgres  naming.table"));
}

#[test]
fn test_rules_filtered_by_engine() {
    cmd()
        .args(["rules", "-e", "postgres", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("column.require-default").not());
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"));
}
