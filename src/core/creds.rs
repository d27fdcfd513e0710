//! Registry credential files.
//!
//! Builds and writes the `.netrc` and `.npmrc` files consumed by later job
//! steps. Both files are parsed downstream by strict line-oriented readers,
//! so the contents here are byte-exact and every line is newline-terminated.

use std::path::Path;

use tracing::debug;

use crate::core::constants;
use crate::error::Result;

/// `.netrc` contents for the registry token.
pub fn netrc_contents(token: &str) -> String {
    format!(
        "machine {} login nobody password {}\n",
        constants::NETRC_MACHINE,
        token
    )
}

/// `.npmrc` contents binding the package scope to the private registry.
pub fn npmrc_contents(token: &str) -> String {
    format!(
        "{}:registry=https://{}\n//{}/:_authToken={}\n",
        constants::NPM_SCOPE,
        constants::NPM_REGISTRY_HOST,
        constants::NPM_REGISTRY_HOST,
        token
    )
}

/// Write both credential files.
pub fn write(netrc_path: &Path, npmrc_path: &Path, token: &str) -> Result<()> {
    std::fs::write(netrc_path, netrc_contents(token))?;
    std::fs::write(npmrc_path, npmrc_contents(token))?;
    debug!(
        netrc = %netrc_path.display(),
        npmrc = %npmrc_path.display(),
        "wrote registry credential files"
    );
    Ok(())
}
