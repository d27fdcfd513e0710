//! Export pipeline.
//!
//! Runs the three stages of a deployment job setup, strictly in order:
//! plain-variable export, secret export, credential-file writes. Each stage
//! is fully awaited before the next begins, and any failure aborts the rest
//! of the run. Already-exported variables are not rolled back.

use std::path::Path;

use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::args::StepArgs;
use crate::core::constants;
use crate::core::creds;
use crate::core::runner::CiRunner;
use crate::core::store::ParameterStore;
use crate::error::{Result, StagehandError};

/// Run the whole pipeline: variables, secrets, credential files.
pub async fn run<S, R>(args: &StepArgs, store: &S, runner: &R) -> Result<()>
where
    S: ParameterStore + ?Sized,
    R: CiRunner + ?Sized,
{
    let home = dirs::home_dir().ok_or(StagehandError::NoHomeDir)?;
    run_stages(
        args,
        store,
        runner,
        Path::new(constants::NETRC_FILE),
        &home.join(constants::NPMRC_FILE),
    )
    .await
}

/// The three stages in their contractual order, each fully awaited.
async fn run_stages<S, R>(
    args: &StepArgs,
    store: &S,
    runner: &R,
    netrc_path: &Path,
    npmrc_path: &Path,
) -> Result<()>
where
    S: ParameterStore + ?Sized,
    R: CiRunner + ?Sized,
{
    export_variables(args, store, runner).await?;
    export_secrets(args, store, runner).await?;
    write_credentials(args, store, netrc_path, npmrc_path).await?;
    Ok(())
}

/// Export plain deployment variables from the per-region settings blob.
///
/// Missing names are collected and reported in one aggregate error at the
/// end, so a failed run names every missing variable at once.
async fn export_variables<S, R>(args: &StepArgs, store: &S, runner: &R) -> Result<()>
where
    S: ParameterStore + ?Sized,
    R: CiRunner + ?Sized,
{
    let key = format!(
        "{}{}",
        constants::SETTINGS_KEY_PREFIX,
        args.region.to_uppercase()
    );
    debug!(key, "fetching deployment settings");

    let settings = store
        .get_one(&key)
        .await?
        .ok_or(StagehandError::SettingsNotFound)?;

    let document: Value = serde_json::from_str(&settings)?;
    let environment = document
        .get(&args.environment)
        .and_then(Value::as_object)
        .ok_or_else(|| StagehandError::EnvironmentNotFound(args.environment.clone()))?;

    let mut not_found: Vec<String> = Vec::new();
    for mapping in &args.variables {
        // Explicit own-key lookup: only the environment object's declared
        // keys count.
        match environment.get(&mapping.source_name) {
            Some(value) => {
                let rendered = render_value(value);
                runner.export_variable(&mapping.export_name, &rendered)?;
                runner.info(&format!(
                    "exported variable {}={}",
                    mapping.export_name, rendered
                ));
            }
            None => not_found.push(mapping.source_name.clone()),
        }
    }

    if !not_found.is_empty() {
        return Err(StagehandError::VariablesNotFound(not_found));
    }
    Ok(())
}

/// Batch-fetch and export secrets, masking each value before it is exported.
async fn export_secrets<S, R>(args: &StepArgs, store: &S, runner: &R) -> Result<()>
where
    S: ParameterStore + ?Sized,
    R: CiRunner + ?Sized,
{
    if args.secrets.is_empty() {
        return Ok(());
    }

    let names: Vec<String> = args
        .secrets
        .iter()
        .map(|m| m.source_name.clone())
        .collect();
    let fetched = store.get_many(&names).await?;

    // One unresolved name fails the whole flow; resolved values in the same
    // response are not exported.
    if !fetched.unresolved.is_empty() {
        for name in &fetched.unresolved {
            runner.error(&format!("failed to fetch secret: {}", name));
        }
        return Err(StagehandError::SecretFetchInvalidParameters(
            fetched.unresolved,
        ));
    }

    for (name, value) in fetched.resolved {
        let mapping = args
            .secrets
            .iter()
            .find(|m| m.source_name == name)
            .ok_or_else(|| StagehandError::MappingLookup(name.clone()))?;

        let value = Zeroizing::new(value);
        // The mask must be registered before the value can appear in any
        // log line, including the export's own side effects.
        runner.register_mask(&value);
        runner.export_variable(&mapping.export_name, &value)?;
        runner.info(&format!("exported secret {}", mapping.export_name));
    }

    Ok(())
}

/// Fetch the registry token and write both credential files.
async fn write_credentials<S>(
    args: &StepArgs,
    store: &S,
    netrc_path: &Path,
    npmrc_path: &Path,
) -> Result<()>
where
    S: ParameterStore + ?Sized,
{
    let token = store
        .get_one(&args.token_parameter)
        .await?
        .ok_or_else(|| StagehandError::TokenNotFound(args.token_parameter.clone()))?;
    let token = Zeroizing::new(token);

    creds::write(netrc_path, npmrc_path, &token)
}

/// Render a settings value for export.
///
/// Strings export verbatim; other JSON leaves export their compact
/// rendering.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
