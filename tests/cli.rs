//! CLI integration tests.
//!
//! These exercise input parsing and the pre-flight failure paths, which all
//! abort before any parameter store call is made.

mod support;

use predicates::prelude::*;
use support::*;

#[test]
fn test_help_shows_usage() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("stagehand") || out.contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("stagehand"));
}

#[test]
fn test_missing_required_inputs_fails() {
    let t = Test::new();

    t.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--environment-name"));
}

#[test]
fn test_malformed_secret_mapping_fails_fast() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--environment-name",
            "prod",
            "--region-name",
            "us",
            "--token-parameter",
            "NPM_TOKEN",
            "--secret-names",
            "GOOD\nbad:",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse name mapping from [bad:]");
    // The failure is also signalled to the runner as a workflow command.
    assert!(stdout(&output).contains("::error::"));
}

#[test]
fn test_malformed_variable_mapping_fails_fast() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--environment-name",
            "prod",
            "--region-name",
            "us",
            "--token-parameter",
            "NPM_TOKEN",
            "--variable-names",
            "a:b:c",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse name mapping from [a:b:c]");
}

#[test]
fn test_inputs_readable_from_env() {
    let t = Test::new();

    // Same malformed-mapping failure, but configured the way a workflow
    // runner passes inputs.
    let output = t
        .cmd()
        .env("INPUT_ENVIRONMENT_NAME", "prod")
        .env("INPUT_REGION_NAME", "us")
        .env("INPUT_TOKEN_PARAMETER", "NPM_TOKEN")
        .env("INPUT_VARIABLE_NAMES", ":")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse name mapping from [:]");
}

#[test]
fn test_empty_token_parameter_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--environment-name",
            "prod",
            "--region-name",
            "us",
            "--token-parameter",
            "",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required input: token-parameter");
}
