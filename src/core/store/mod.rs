//! Remote parameter store access.
//!
//! Provides the retrieval abstraction and implementations.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`, `consul.rs`)
//! 3. Re-export from this module

use std::collections::BTreeMap;

use crate::error::StoreError;

pub mod memory;
pub mod ssm;

pub use memory::MemoryStore;
pub use ssm::SsmStore;

/// Merged environment mapping, env-var name to value.
///
/// Built fresh on every resolution; never persisted.
pub type ConfigMap = BTreeMap<String, String>;

/// Maximum number of names the store accepts in one batch value fetch.
pub const MAX_BATCH: usize = 10;

/// A single remote parameter as retrieved: the key still carries the
/// configured prefix, the value is the decrypted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEntry {
    pub key: String,
    pub value: String,
}

impl ParameterEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One page of a path-based retrieval: the entries plus an opaque
/// continuation token (`None` means no more pages).
#[derive(Debug, Default)]
pub struct ParameterPage {
    pub entries: Vec<ParameterEntry>,
    pub next_token: Option<String>,
}

/// Remote parameter store trait.
///
/// Abstracts the three read-only capabilities the resolver needs so
/// tests can substitute an in-memory fake for the real store.
///
/// All retrieval is decrypt-on-read: values come back as plaintext.
pub trait ParameterStore {
    /// Enumerate every parameter name known to the store.
    ///
    /// Implementations page through the store's listing API internally;
    /// the page size cap is theirs to honor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Enumeration` if the listing call fails.
    fn list_names(&self) -> std::result::Result<Vec<String>, StoreError>;

    /// Fetch values for an explicit list of names.
    ///
    /// Callers must keep `names` non-empty and at most [`MAX_BATCH`]
    /// long; the remote API rejects anything outside that range.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the batch call fails or any
    /// requested name comes back invalid.
    fn fetch_by_names(
        &self,
        names: &[String],
    ) -> std::result::Result<Vec<ParameterEntry>, StoreError>;

    /// Fetch one page of parameters under a path prefix.
    ///
    /// Pass the previous page's `next_token` to continue; `None` starts
    /// from the beginning.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the page retrieval fails.
    fn fetch_by_path(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> std::result::Result<ParameterPage, StoreError>;
}
