//! Integration tests for the portfolio-panel CLI
//!
//! These tests run the actual binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn panel_cmd() -> Command {
    let mut cmd = Command::cargo_bin("portfolio-panel").unwrap();
    // Keep ./portfolio-panel.yaml lookups away from the repo
    cmd.current_dir(std::env::temp_dir());
    cmd
}

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("panel.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn test_help_flag() {
    panel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio and AI assistant panel"));
}

#[test]
fn test_render_help_lists_sections() {
    panel_cmd()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("ai"))
        .stdout(predicate::str::contains("--collapsed"));
}

// ============================================================================
// Headless render
// ============================================================================

#[test]
fn test_render_default_shows_portfolio() {
    panel_cmd()
        .args(["render", "--width", "80", "--height", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[◈ Portfolio] │ ✦ AI Assistant"))
        .stdout(predicate::str::contains("AAPL"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn test_render_ai_section() {
    panel_cmd()
        .args(["render", "--select", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("◈ Portfolio │ [✦ AI Assistant]"))
        .stdout(predicate::str::contains("Hello! Ask me about your portfolio."))
        .stdout(predicate::str::contains("AAPL").not());
}

#[test]
fn test_render_collapsed_hides_tabs_and_content() {
    panel_cmd()
        .args(["render", "--collapsed", "--select", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[✦]"))
        .stdout(predicate::str::contains("Portfolio").not())
        .stdout(predicate::str::contains("AI Assistant").not())
        .stdout(predicate::str::contains("AAPL").not());
}

#[test]
fn test_render_json_reports_pressed_state() {
    let output = panel_cmd()
        .args(["render", "--collapsed", "--select", "ai", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["collapsed"], true);
    assert_eq!(json["selected"], "ai");
    assert!(json["mounted"].is_null());
    assert_eq!(json["controls"][0]["pressed"], false);
    assert_eq!(json["controls"][1]["pressed"], true);
    assert!(json["controls"][1]["label"].is_null());
}

#[test]
fn test_render_rejects_tiny_size() {
    panel_cmd()
        .args(["render", "--width", "3", "--height", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid render size 3x2"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_render_with_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
portfolio:
  currency: EUR
  holdings:
    - symbol: ASML
      quantity: 4
      price: 650.0
      cost_basis: 600.0
assistant:
  languages: [es]
  default_language: es
"#,
    );

    panel_cmd()
        .args(["render", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ASML"))
        .stdout(predicate::str::contains("2,600.00 EUR"));

    panel_cmd()
        .args(["render", "--select", "ai", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("es · Español"));
}

#[test]
fn test_config_collapsed_flag_is_honoured() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "collapsed: true\n");

    panel_cmd()
        .args(["render", "--format", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"collapsed\": true"));
}

#[test]
fn test_render_missing_config() {
    panel_cmd()
        .args(["render", "--config", "/nonexistent/panel.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

// ============================================================================
// check-config
// ============================================================================

#[test]
fn test_check_config_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "portfolio:\n  holdings:\n    - symbol: VTI\n      quantity: 1\n      price: 250\n",
    );

    panel_cmd()
        .arg("check-config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 holdings"));
}

#[test]
fn test_check_config_lists_every_problem() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
tick_rate_ms: 0
portfolio:
  holdings:
    - symbol: bad symbol
      quantity: -1
      price: 10
assistant:
  languages: [en]
  default_language: ja
"#,
    );

    panel_cmd()
        .arg("check-config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_rate_ms must be greater than 0"))
        .stderr(predicate::str::contains("invalid symbol 'bad symbol'"))
        .stderr(predicate::str::contains("quantity must be >= 0"))
        .stderr(predicate::str::contains("'ja' is not in assistant.languages"))
        .stderr(predicate::str::contains("4 problem(s)"));
}

#[test]
fn test_check_config_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "portfolio: [not, a, map]\n");

    panel_cmd()
        .arg("check-config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config parse error"));
}
