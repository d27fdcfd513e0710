//! Constants used throughout stagehand.
//!
//! Centralizes magic strings shared by the export stages.

/// Parameter key prefix for the per-region deployment settings blob.
///
/// The full key is this prefix followed by the uppercased region name,
/// e.g. `DEPLOYMENT_VARIABLES_US`.
pub const SETTINGS_KEY_PREFIX: &str = "DEPLOYMENT_VARIABLES_";

/// Network-credentials file name, written to the working directory.
pub const NETRC_FILE: &str = ".netrc";

/// Package-registry-credentials file name, written to the home directory.
pub const NPMRC_FILE: &str = ".npmrc";

/// Machine entry for the `.netrc` file.
pub const NETRC_MACHINE: &str = "github.com";

/// Host of the private package registry.
pub const NPM_REGISTRY_HOST: &str = "npm.pkg.github.com";

/// Package scope bound to the private registry in `.npmrc`.
pub const NPM_SCOPE: &str = "@stagehand";
