use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the cellcheck binary
#[allow(deprecated)]
fn cellcheck() -> Command {
    Command::cargo_bin("cellcheck").expect("Failed to find cellcheck binary")
}

// ============================================================================
// compare command tests
// ============================================================================

#[test]
fn test_compare_with_tolerance_config_passes() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPARISON REPORT"))
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("ALMOST"))
        .stdout(predicate::str::contains("OMITTED"));
}

#[test]
fn test_compare_without_config_fails() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("Differences:"))
        .stdout(predicate::str::contains("(2, 1)"));
}

#[test]
fn test_compare_identical_tables_without_header() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("reference.json"))
        .arg(fixture_path("reference.json"))
        .arg("--no-header")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows compared:  4"))
        .stdout(predicate::str::contains("Cells compared: 12"));
}

#[test]
fn test_compare_sheet_override() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .arg("--sheet")
        .arg("Strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[equal]"));
}

#[test]
fn test_compare_missing_rows() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured_short.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing rows:   2"))
        .stdout(predicate::str::contains("row_alignment"));
}

#[test]
fn test_compare_german_toml_config() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured_german.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare_german.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("MATCHING"))
        .stdout(predicate::str::contains("ALMOST"));
}

#[test]
fn test_compare_json_output() {
    let output = cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run cellcheck");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(report["passed"], true);
    assert_eq!(report["total"], 9);
    assert_eq!(report["counts"]["EQUALS"], 5);
    assert_eq!(report["counts"]["ALMOST"], 1);
    assert_eq!(report["counts"]["OMITTED"], 3);
    assert_eq!(report["columns"][1]["name"], "amount");
    assert_eq!(report["outcome"]["rows_compared"], 3);
}

#[test]
fn test_compare_writes_highlighted_table() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("highlighted.json");

    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Highlighted reference written"));

    let content = fs::read_to_string(&output_path).unwrap();
    let highlighted: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(highlighted["rows"][0][0], "id");
    let almost: Vec<_> = highlighted["highlights"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|h| h["result"] == "ALMOST")
        .collect();
    assert_eq!(almost.len(), 1);
    assert_eq!(almost[0]["row"], 2);
    assert_eq!(almost[0]["column"], 1);
    assert_eq!(almost[0]["fill"], "CCFFFF");
    assert!(highlighted["inserted_rows"].as_array().unwrap().is_empty());
}

#[test]
fn test_compare_writes_differing_measured_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("highlighted.json");

    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("compare.yml"))
        .arg("--sheet")
        .arg("Strict")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Inserted rows:  1"));

    let content = fs::read_to_string(&output_path).unwrap();
    let highlighted: serde_json::Value = serde_json::from_str(&content).unwrap();

    let inserted = highlighted["inserted_rows"].as_array().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0]["after_row"], 2);
    assert_eq!(inserted[0]["values"][1], 20.03);
    assert_eq!(inserted[0]["results"][1], "DIFFERENT");
    assert_eq!(inserted[0]["fills"][1], "CCFFCC");
    assert_eq!(highlighted["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_compare_invalid_table() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("not_a_table.json"))
        .arg(fixture_path("reference.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse table file"));
}

#[test]
fn test_compare_missing_file() {
    cellcheck()
        .arg("compare")
        .arg("nonexistent.json")
        .arg(fixture_path("reference.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_compare_invalid_config() {
    cellcheck()
        .arg("compare")
        .arg(fixture_path("measured.json"))
        .arg(fixture_path("reference.json"))
        .arg("--config")
        .arg(fixture_path("invalid_digits.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid comparison configuration"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_config() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("compare.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("tolerant_float"))
        .stdout(predicate::str::contains("Sheet Strict"));
}

#[test]
fn test_check_toml_config() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("compare_german.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("german"))
        .stdout(predicate::str::contains("#2"));
}

#[test]
fn test_check_json_format() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("compare.yml"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn test_check_invalid_parameters() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("invalid_digits.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_invalid_syntax() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("invalid_syntax.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_check_unsupported_extension() {
    cellcheck()
        .arg("check")
        .arg(fixture_path("reference.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}
