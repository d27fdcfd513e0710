//! Test support utilities for stagehand integration tests.

#![allow(dead_code)]

use std::process::Output;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and home directory. No
/// process-global state is mutated; child processes use `.current_dir()` so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory for the step
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        Self { dir, home }
    }

    /// Create a stagehand command with an isolated environment.
    ///
    /// HOME points at the temp home, GITHUB_ENV at a file in the temp
    /// working directory, and any ambient INPUT_* variables are cleared.
    pub fn cmd(&self) -> assert_cmd::Command {
        #[allow(deprecated)]
        let mut cmd =
            assert_cmd::Command::cargo_bin("stagehand").expect("failed to find stagehand binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("GITHUB_ENV", self.dir.path().join("github_env"));
        for name in [
            "INPUT_ENVIRONMENT_NAME",
            "INPUT_REGION_NAME",
            "INPUT_TOKEN_PARAMETER",
            "INPUT_SECRET_NAMES",
            "INPUT_VARIABLE_NAMES",
            "INPUT_AWS_REGION",
        ] {
            cmd.env_remove(name);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}
