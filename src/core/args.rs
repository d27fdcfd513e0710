//! Step argument resolution.
//!
//! Parses the compact `source[:export]` name-mapping syntax and assembles the
//! read-only argument set the rest of the run works from.

use tracing::debug;

use crate::error::{Result, StagehandError};

/// A single name mapping: read `source_name` from the parameter store or
/// settings blob, expose it to the job environment as `export_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
    pub source_name: String,
    pub export_name: String,
}

/// Resolved step arguments.
///
/// Built once at step start and read-only for the rest of the run. Duplicate
/// export names across mappings are allowed; the last one processed in list
/// order wins in the job environment.
#[derive(Debug, Clone)]
pub struct StepArgs {
    /// Logical deployment environment, e.g. `prod`.
    pub environment: String,
    /// Logical deployment region; uppercased into the settings lookup key.
    pub region: String,
    /// Parameter key under which the registry auth token is stored.
    pub token_parameter: String,
    /// Secret mappings, fetched in one batch and masked before export.
    pub secrets: Vec<NameMapping>,
    /// Plain variable mappings, read from the settings blob.
    pub variables: Vec<NameMapping>,
}

impl StepArgs {
    /// Resolve the full argument set from raw step inputs.
    ///
    /// `secret_names` and `variable_names` are newline-separated mapping
    /// lists; blank lines are skipped. The first malformed mapping aborts
    /// resolution entirely, so a run never starts with a partial argument
    /// set.
    pub fn resolve(
        environment: &str,
        region: &str,
        token_parameter: &str,
        secret_names: &str,
        variable_names: &str,
    ) -> Result<Self> {
        if environment.is_empty() {
            return Err(StagehandError::MissingInput("environment-name"));
        }
        if region.is_empty() {
            return Err(StagehandError::MissingInput("region-name"));
        }
        if token_parameter.is_empty() {
            return Err(StagehandError::MissingInput("token-parameter"));
        }

        let secrets = parse_mapping_lines(secret_names)?;
        let variables = parse_mapping_lines(variable_names)?;

        debug!(
            environment,
            region,
            secrets = secrets.len(),
            variables = variables.len(),
            "resolved step arguments"
        );

        Ok(Self {
            environment: environment.to_string(),
            region: region.to_string(),
            token_parameter: token_parameter.to_string(),
            secrets,
            variables,
        })
    }
}

/// Parse every non-blank line of a multiline mapping input.
fn parse_mapping_lines(input: &str) -> Result<Vec<NameMapping>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_name_mapping)
        .collect()
}

/// Parse a single `source[:export]` mapping.
///
/// A lone token maps a name to itself; `left:right` maps `left` upstream to
/// `right` in the job environment. Anything else (empty string, lone colon,
/// empty half, more than one colon) is malformed.
pub fn parse_name_mapping(raw: &str) -> Result<NameMapping> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() == 1 && !raw.is_empty() {
        return Ok(NameMapping {
            source_name: raw.to_string(),
            export_name: raw.to_string(),
        });
    }
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        return Ok(NameMapping {
            source_name: parts[0].to_string(),
            export_name: parts[1].to_string(),
        });
    }
    Err(StagehandError::MalformedMapping(raw.to_string()))
}
