//! End-to-end tests of the `divq` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn divq() -> Command {
    Command::cargo_bin("divq").unwrap()
}

fn problem_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// Success paths
// ============================================================================

#[test]
fn test_default_search_output() {
    divq()
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Division Property holds for k = 1 when u = 04",
        ));
}

#[test]
fn test_no_subcommand_runs_search() {
    divq().assert().success().stdout(predicate::str::contains(
        "Division Property holds for k = 1 when u = 04",
    ));
}

#[test]
fn test_classical_matches_quantum() {
    divq()
        .arg("classical")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Division Property holds for k = 1 when u = 04",
        ));
}

#[test]
fn test_search_from_yaml_file() {
    let file = problem_file(".yaml", "elements: [7, 7]\nmarking_qubits: 3\n");
    divq()
        .args(["search", "-i"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Division Property holds for k = 3 when u = 00",
        ));
}

#[test]
fn test_count_json() {
    divq()
        .args(["count", "--u", "0x04", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"u\": 4"));
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_invalid_multiset_exits_with_error() {
    let file = problem_file(".json", r#"{"elements": [9]}"#);
    divq()
        .args(["search", "-i"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Invalid multiset"));
}

#[test]
fn test_missing_problem_file() {
    divq()
        .args(["search", "-i", "/nonexistent/problem.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_oversized_simulator_exits_with_error() {
    divq()
        .args(["search", "--max-qubits", "63", "-p", "60"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid max_qubits"));
}

#[test]
fn test_register_wider_than_limit() {
    divq()
        .args(["search", "-p", "30"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_shots_without_sampled_readout() {
    divq()
        .args(["search", "--shots", "64"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("require sampled readout"));
}
