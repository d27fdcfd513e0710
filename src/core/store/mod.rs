//! Parameter store access.
//!
//! The export pipeline talks to the remote key-value store through the
//! `ParameterStore` trait so tests can substitute an in-memory fake. The
//! production implementation is AWS SSM Parameter Store.

pub mod ssm;

pub use ssm::SsmStore;

use async_trait::async_trait;

use crate::error::Result;

/// Outcome of a batch fetch.
///
/// Consumed once per run. `unresolved` holds the requested keys the store
/// could not resolve to a value; a non-empty list fails the whole secret
/// flow.
#[derive(Debug, Default)]
pub struct FetchResult {
    /// Successfully resolved `(key, value)` pairs.
    pub resolved: Vec<(String, String)>,
    /// Requested keys the store could not resolve.
    pub unresolved: Vec<String>,
}

/// Remote key-value parameter store.
#[async_trait]
pub trait ParameterStore {
    /// Fetch a single value. `Ok(None)` means the key does not exist;
    /// transport failures are errors.
    async fn get_one(&self, key: &str) -> Result<Option<String>>;

    /// Fetch a batch of values in one call.
    async fn get_many(&self, keys: &[String]) -> Result<FetchResult>;
}
