//! AWS SSM Parameter Store backend.
//!
//! Retrieves parameters with server-side decryption enabled.
//! Credentials and region come from the default provider chain
//! (AWS_ACCESS_KEY_ID and friends, profiles, IMDS); request timeouts
//! are whatever the SDK enforces.

use tokio::runtime::Runtime;
use tracing::trace;

use super::{ParameterEntry, ParameterPage, ParameterStore};
use crate::error::StoreError;

/// Page size requested from GetParametersByPath.
pub const PATH_PAGE_SIZE: i32 = 10;

/// Page size for DescribeParameters (the API caps it at 50).
const DESCRIBE_PAGE_SIZE: i32 = 50;

/// AWS SSM Parameter Store client.
///
/// The SDK is async; this wraps it behind the synchronous
/// [`ParameterStore`] trait with a current-thread runtime, so one
/// resolution is a plain sequential chain of blocking requests.
pub struct SsmStore {
    runtime: Runtime,
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Connect using the default AWS credential provider chain.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the tokio runtime cannot be
    /// created. Credential problems surface later, on the first request.
    pub fn connect() -> std::result::Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(format!("failed to create runtime: {}", e)))?;

        let config =
            runtime.block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
        let client = aws_sdk_ssm::Client::new(&config);

        Ok(Self { runtime, client })
    }
}

impl ParameterStore for SsmStore {
    fn list_names(&self) -> std::result::Result<Vec<String>, StoreError> {
        self.runtime.block_on(async {
            let mut names = Vec::new();
            let mut token: Option<String> = None;

            loop {
                let resp = self
                    .client
                    .describe_parameters()
                    .max_results(DESCRIBE_PAGE_SIZE)
                    .set_next_token(token.take())
                    .send()
                    .await
                    .map_err(|e| {
                        StoreError::Enumeration(format!("DescribeParameters failed: {}", e))
                    })?;

                for meta in resp.parameters() {
                    if let Some(name) = meta.name() {
                        names.push(name.to_string());
                    }
                }

                token = resp.next_token().map(str::to_string);
                if token.is_none() {
                    break;
                }
            }

            trace!(count = names.len(), "enumerated parameter names");
            Ok(names)
        })
    }

    fn fetch_by_names(
        &self,
        names: &[String],
    ) -> std::result::Result<Vec<ParameterEntry>, StoreError> {
        trace!(count = names.len(), "fetching parameters by name");

        self.runtime.block_on(async {
            let resp = self
                .client
                .get_parameters()
                .set_names(Some(names.to_vec()))
                .with_decryption(true)
                .send()
                .await
                .map_err(|e| StoreError::Fetch(format!("GetParameters failed: {}", e)))?;

            // These names came from a successful enumeration moments ago,
            // so the store refusing them is a malfunction, not an absence.
            let invalid = resp.invalid_parameters();
            if !invalid.is_empty() {
                return Err(StoreError::Fetch(format!(
                    "store rejected {} confirmed name(s): {}",
                    invalid.len(),
                    invalid.join(", ")
                )));
            }

            Ok(resp
                .parameters()
                .iter()
                .filter_map(entry_from_parameter)
                .collect())
        })
    }

    fn fetch_by_path(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> std::result::Result<ParameterPage, StoreError> {
        trace!(path = %path, continuation = token.is_some(), "fetching parameter page");

        self.runtime.block_on(async {
            let resp = self
                .client
                .get_parameters_by_path()
                .path(path)
                .with_decryption(true)
                .max_results(PATH_PAGE_SIZE)
                .set_next_token(token.map(str::to_string))
                .send()
                .await
                .map_err(|e| StoreError::Fetch(format!("GetParametersByPath failed: {}", e)))?;

            Ok(ParameterPage {
                entries: resp
                    .parameters()
                    .iter()
                    .filter_map(entry_from_parameter)
                    .collect(),
                next_token: resp.next_token().map(str::to_string),
            })
        })
    }
}

fn entry_from_parameter(param: &aws_sdk_ssm::types::Parameter) -> Option<ParameterEntry> {
    match (param.name(), param.value()) {
        (Some(key), Some(value)) => Some(ParameterEntry::new(key, value)),
        _ => None,
    }
}
