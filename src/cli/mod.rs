//! Command-line interface.
//!
//! Every input can be given as a flag or as an `INPUT_*` environment
//! variable, which is how a workflow runner passes step configuration.

pub mod output;

use clap::Parser;

use crate::core::action;
use crate::core::args::StepArgs;
use crate::core::runner::{CiRunner, GithubRunner};
use crate::core::store::SsmStore;
use crate::error::Result;

/// Stagehand - stages deployment variables, secrets, and registry
/// credentials for the rest of a CI job.
#[derive(Parser)]
#[command(
    name = "stagehand",
    about = "Stage deployment variables, secrets, and registry credentials for a CI job",
    version
)]
pub struct Cli {
    /// Target deployment environment (e.g. prod, staging)
    #[arg(long, env = "INPUT_ENVIRONMENT_NAME")]
    pub environment_name: String,

    /// Target deployment region (e.g. us, eu)
    #[arg(long, env = "INPUT_REGION_NAME")]
    pub region_name: String,

    /// Parameter key holding the package registry auth token
    #[arg(long, env = "INPUT_TOKEN_PARAMETER")]
    pub token_parameter: String,

    /// Newline-separated secret mappings, each `source[:export]`
    #[arg(long, env = "INPUT_SECRET_NAMES", default_value = "")]
    pub secret_names: String,

    /// Newline-separated variable mappings, each `source[:export]`
    #[arg(long, env = "INPUT_VARIABLE_NAMES", default_value = "")]
    pub variable_names: String,

    /// AWS region for the store client; also exported as AWS_REGION
    #[arg(long, env = "INPUT_AWS_REGION")]
    pub aws_region: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the inputs and run the export pipeline to completion.
pub fn execute(cli: Cli) -> Result<()> {
    let args = StepArgs::resolve(
        &cli.environment_name,
        &cli.region_name,
        &cli.token_parameter,
        &cli.secret_names,
        &cli.variable_names,
    )?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let runner = GithubRunner::from_env();

        if let Some(region) = &cli.aws_region {
            runner.export_variable("AWS_REGION", region)?;
        }

        let store = SsmStore::connect(cli.aws_region.clone()).await;
        action::run(&args, &store, &runner).await
    })?;

    output::success("environment staged");
    Ok(())
}
