//! End-to-end tests for the stache binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A `stache` command running inside `dir`, isolated from the caller's
/// environment.
fn stache(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stache").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STACHE_CONFIG")
        .env_remove("STACHE_VERBOSE")
        .env("STACHE_NO_COLOR", "true");
    cmd
}

#[test]
fn test_tokens_text_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "hello.mustache", "Hello {{name}}!");

    stache(&dir)
        .args(["tokens", "hello.mustache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 text 0..6 \"Hello \""))
        .stdout(predicate::str::contains("1 escaped_variable 6..14 \"name\""));
}

#[test]
fn test_tokens_json_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "list.mustache", "{{#items}}{{.}}{{/items}}");

    let output = stache(&dir)
        .args(["tokens", "list.mustache", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let types: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["section", "escaped_variable", "close"]);
}

#[test]
fn test_tokens_with_delimiters_flag() {
    let dir = TempDir::new().unwrap();
    write(&dir, "erb.mustache", "{{a}}<%b%>");

    stache(&dir)
        .args(["tokens", "erb.mustache", "--delimiters", "<% %>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text 0..5 \"{{a}}\""))
        .stdout(predicate::str::contains("escaped_variable 5..10 \"b\""));
}

#[test]
fn test_tokens_uses_config_file() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "stache.toml",
        "[lexer]\ndelimiters = [\"[[\", \"]]\"]\n\n[output]\nformat = \"json\"\n",
    );
    write(&dir, "page.mustache", "[[title]]");

    stache(&dir)
        .args(["tokens", "page.mustache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"open\": \"[[\""));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "custom.toml", "[output]\nformat = \"json\"\n");
    write(&dir, "page.mustache", "x");

    stache(&dir)
        .arg("--config")
        .arg(&config)
        .args(["tokens", "page.mustache"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_missing_config_path_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "page.mustache", "x");

    stache(&dir)
        .args(["--config", "missing.toml", "tokens", "page.mustache"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_tokens_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "bad.mustache", "line one\n{{#open");

    stache(&dir)
        .args(["tokens", "bad.mustache", "--template-id", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parse error at line 2 of template bad: Unclosed Mustache tag",
        ));
}

#[test]
fn test_tokens_missing_file() {
    let dir = TempDir::new().unwrap();

    stache(&dir)
        .args(["tokens", "nope.mustache"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nope.mustache"));
}

#[test]
fn test_check_success() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.mustache", "{{#a}}{{/a}}");
    write(&dir, "b.mustache", "{{=<% %>=}}<%b%>");

    stache(&dir)
        .args(["check", "a.mustache", "b.mustache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 template(s) OK"));
}

#[test]
fn test_check_reports_every_failure() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.mustache", "{{a}}");
    write(&dir, "unclosed.mustache", "\n\n{{b");
    write(&dir, "delims.mustache", "{{=one=}}");

    stache(&dir)
        .args(["check", "good.mustache", "unclosed.mustache", "delims.mustache"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: Unclosed Mustache tag"))
        .stderr(predicate::str::contains("--> unclosed.mustache:3"))
        .stderr(predicate::str::contains("error: Invalid set delimiters tag"))
        .stderr(predicate::str::contains("2 of 3 template(s) failed to tokenize"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    write(&dir, "page.mustache", "{{=<% %>=}}");

    stache(&dir)
        .args(["--verbose", "tokens", "page.mustache", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tokenizing"))
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();

    stache(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}
