//! AWS SSM Parameter Store backend.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.) or
//! from the default credential provider chain, which is how the CI runner's
//! job role is picked up. All lookups request decryption so SecureString
//! parameters come back in plaintext.

use async_trait::async_trait;
use tracing::trace;

use super::{FetchResult, ParameterStore};
use crate::error::{Result, StagehandError};

/// AWS SSM Parameter Store client.
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Connect using the default credential provider chain.
    ///
    /// `region` overrides the chain's region resolution when set; otherwise
    /// the SDK decides from the environment.
    pub async fn connect(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        Self {
            client: aws_sdk_ssm::Client::new(&config),
        }
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn get_one(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "GetParameter");

        let out = self
            .client
            .get_parameter()
            .name(key)
            .with_decryption(true)
            .send()
            .await;

        match out {
            Ok(out) => Ok(out
                .parameter()
                .and_then(|p| p.value())
                .map(str::to_string)),
            // Only a missing key maps to absence; transport failures propagate.
            Err(err) => {
                let not_found = err
                    .as_service_error()
                    .map(|e| e.is_parameter_not_found())
                    .unwrap_or(false);
                if not_found {
                    Ok(None)
                } else {
                    Err(StagehandError::Store(format!(
                        "GetParameter failed for {}: {}",
                        key, err
                    )))
                }
            }
        }
    }

    async fn get_many(&self, keys: &[String]) -> Result<FetchResult> {
        trace!(count = keys.len(), "GetParameters");

        let out = self
            .client
            .get_parameters()
            .set_names(Some(keys.to_vec()))
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| StagehandError::Store(format!("GetParameters failed: {}", e)))?;

        let resolved = out
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some((name.to_string(), value.to_string())),
                _ => None,
            })
            .collect();

        let unresolved = out.invalid_parameters().to_vec();

        Ok(FetchResult {
            resolved,
            unresolved,
        })
    }
}
