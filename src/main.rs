//! Stagehand - stages the environment for the rest of a deployment job.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stagehand::cli::{execute, output, Cli};
use stagehand::core::runner;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STAGEHAND_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stagehand=debug")
        } else {
            EnvFilter::new("stagehand=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    // Single error boundary: every failure class arrives here as a concrete
    // error kind and becomes one failed-step signal.
    if let Err(e) = execute(cli) {
        let msg = e.to_string();
        runner::mark_failed(&msg);
        output::error(&msg);
        std::process::exit(1);
    }
}
