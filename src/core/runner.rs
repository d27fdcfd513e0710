//! CI runner capability.
//!
//! Environment export, log masking, and runner-visible logging are injected
//! through the `CiRunner` trait so the export pipeline never touches
//! process-global state directly and tests can record side effects with a
//! fake.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

/// Heredoc delimiter for multiline values in the runner env file.
const ENV_DELIMITER: &str = "STAGEHAND_EOF";

/// Side-effect surface of the CI runner.
pub trait CiRunner {
    /// Emit an informational log line.
    fn info(&self, msg: &str);

    /// Emit an error-level log line.
    fn error(&self, msg: &str);

    /// Instruct the runner to redact `value` from all subsequent log output.
    fn register_mask(&self, value: &str);

    /// Export an environment variable to later job steps and make it visible
    /// to the current process.
    fn export_variable(&self, name: &str, value: &str) -> Result<()>;
}

/// GitHub Actions runner implementation.
///
/// Masking and error annotations are workflow commands on stdout; exports are
/// appended to the file named by `$GITHUB_ENV`. When that variable is unset
/// (running outside a workflow) exports only touch the current process.
pub struct GithubRunner {
    env_file: Option<PathBuf>,
}

impl GithubRunner {
    /// Build a runner from the ambient workflow environment.
    pub fn from_env() -> Self {
        Self {
            env_file: std::env::var_os("GITHUB_ENV").map(PathBuf::from),
        }
    }

    /// Build a runner with an explicit env file.
    pub fn with_env_file(env_file: Option<PathBuf>) -> Self {
        Self { env_file }
    }
}

impl CiRunner for GithubRunner {
    fn info(&self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&self, msg: &str) {
        println!("::error::{}", escape_data(msg));
    }

    fn register_mask(&self, value: &str) {
        println!("::add-mask::{}", escape_data(value));
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        if let Some(path) = &self.env_file {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            write!(file, "{}", env_file_entry(name, value)?)?;
        } else {
            debug!(name, "no GITHUB_ENV file, exporting to current process only");
        }

        // Later steps read the env file; immediate in-job consumers read the
        // process environment.
        std::env::set_var(name, value);
        Ok(())
    }
}

/// Mark the whole step failed.
///
/// Emitted once from the top-level error boundary, after which the process
/// exits non-zero.
pub fn mark_failed(msg: &str) {
    println!("::error::{}", escape_data(msg));
}

/// Escape command data so the runner decodes it as one command line.
///
/// A raw `%`, `\r`, or `\n` would terminate the command early; for a mask
/// that means everything after the first line goes to the log unredacted.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format one env file entry, using the heredoc form for multiline values.
fn env_file_entry(name: &str, value: &str) -> Result<String> {
    if !value.contains('\n') {
        return Ok(format!("{}={}\n", name, value));
    }
    if value.lines().any(|line| line == ENV_DELIMITER) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("value of {} contains the env file delimiter", name),
        )
        .into());
    }
    Ok(format!(
        "{}<<{}\n{}\n{}\n",
        name, ENV_DELIMITER, value, ENV_DELIMITER
    ))
}
