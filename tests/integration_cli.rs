use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_prints_canonical_form_for_expr() {
    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse").arg("--expr").arg("A&B|C");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("((A&B)|C)"));
}

#[test]
fn cli_parses_a_file_with_several_expressions() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ok.fol");
    fs::write(&path, "@x1 P(x1), 0''\n").expect("write");

    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("@x1P(x1)"))
        .stdout(predicate::str::contains("0''"));
}

#[test]
fn cli_returns_one_for_unbalanced_input() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ng.fol");
    fs::write(&path, "(A&B\n").expect("write");

    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("E-BRACKET"));
}

#[test]
fn cli_reports_sort_violations() {
    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse").arg("--expr").arg("P(A&B)");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("E-SORT"));
}

#[test]
fn cli_returns_one_for_missing_file() {
    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse").arg("/tmp/non-existent-folparse-input.fol");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("E-IO"));
}

#[test]
fn cli_without_input_returns_code_2() {
    let mut cmd = cargo_bin_cmd!("folparse");
    cmd.arg("parse");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("E-IO"));
}

#[test]
fn cli_json_output_for_success() {
    let mut cmd = cargo_bin_cmd!("folparse");
    let output = cmd
        .arg("parse")
        .arg("--expr")
        .arg("A&B|C")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["expressions"][0]["text"], "((A&B)|C)");
    assert_eq!(value["expressions"][0]["source"], "<expr>");
}

#[test]
fn cli_json_output_for_failure() {
    let mut cmd = cargo_bin_cmd!("folparse");
    let output = cmd
        .arg("parse")
        .arg("--expr")
        .arg("P(A&B)")
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["status"], "error");
    let diagnostics = value["diagnostics"].as_array().expect("diagnostics array");
    assert!(diagnostics.iter().any(|d| d["code"] == "E-SORT"));
    assert!(diagnostics.iter().any(|d| d["hint"].is_string()));
    assert!(diagnostics.iter().any(|d| d["source"] == "<expr>"));
}

#[test]
fn cli_json_output_for_missing_file_has_source() {
    let missing = "/tmp/non-existent-folparse-json-missing.fol";
    let mut cmd = cargo_bin_cmd!("folparse");
    let output = cmd
        .arg("parse")
        .arg(missing)
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["status"], "error");
    let diagnostics = value["diagnostics"].as_array().expect("diagnostics array");
    assert!(diagnostics.iter().any(|d| d["code"] == "E-IO"));
    assert!(diagnostics.iter().any(|d| d["source"] == missing));
}
