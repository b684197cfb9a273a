//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ngforge(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ngforge").unwrap();
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp.path().join("config.toml"));
    cmd
}

#[test]
fn test_error_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["new", "My_App", "-y", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_missing_name_without_prompt() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["new", "-y", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project name is required"));
}

#[cfg(unix)]
#[test]
fn test_error_node_checked_before_questions() {
    let temp = TempDir::new().unwrap();
    let empty_path = temp.path().join("bin");
    std::fs::create_dir(&empty_path).unwrap();

    // No name and no prompts: the questionnaire would fail, the Node check
    // has to fail first.
    ngforge(&temp)
        .env("PATH", &empty_path)
        .args(["new", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Node.js 20+ is required"))
        .stderr(predicate::str::contains("project name is required").not());
}

#[test]
fn test_error_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["new", "demo", "--framework", "react"])
        .assert()
        .code(2);
}

#[test]
fn test_error_unknown_style_value() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["new", "demo", "--style", "less"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("tailwind"));
}

#[test]
fn test_error_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp).args(["-q", "-v", "config", "path"]).assert().code(2);
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("defaults.package_manager"));
}

#[test]
fn test_error_invalid_config_value_is_not_written() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["config", "set", "defaults.styles", "less"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value 'less'"));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_error_malformed_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[defaults\n").unwrap();
    ngforge(&temp)
        .args(["new", "demo", "-y", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_verbose_hint_only_without_verbose() {
    let temp = TempDir::new().unwrap();
    ngforge(&temp)
        .args(["new", "Bad", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--verbose"));
}
