//! Secret resolution against a remote parameter store.
//!
//! Fetches every parameter under a path prefix, strips the prefix from
//! each key, and overlays the result onto a base environment map.
//! [`Resolver::resolve`] surfaces remote failures to the caller;
//! [`Resolver::resolve_or_base`] applies the default policy of logging
//! the failure and returning the base map unchanged, so a missing or
//! broken store never stops an otherwise-startable process.

use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::store::{ConfigMap, ParameterEntry, ParameterStore, MAX_BATCH};
use crate::error::StoreError;

/// Upper bound on pages followed during path retrieval.
///
/// Guards against a store that keeps returning a continuation token
/// that never clears; hitting the bound is reported as an error rather
/// than looping forever.
const MAX_PAGES: usize = 1_000;

/// How parameters are retrieved from the store.
///
/// The two strategies produce the same entries for the same prefix;
/// they differ only in which store APIs they exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Page through the store's path-based retrieval API.
    #[default]
    Path,
    /// Enumerate all names, filter client-side, then batch-fetch values.
    Enumerate,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "path" => Ok(Strategy::Path),
            "enumerate" => Ok(Strategy::Enumerate),
            other => Err(format!(
                "unknown strategy: {} (expected \"path\" or \"enumerate\")",
                other
            )),
        }
    }
}

/// Resolves secrets under a prefix into a merged environment map.
pub struct Resolver<'a, S: ParameterStore + ?Sized> {
    store: &'a S,
    strategy: Strategy,
}

impl<'a, S: ParameterStore + ?Sized> Resolver<'a, S> {
    /// Create a resolver over the given store with the default strategy.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            strategy: Strategy::default(),
        }
    }

    /// Set the retrieval strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fetch all parameters under `prefix`, keys still carrying the prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Enumeration` if the initial listing fails,
    /// `StoreError::Fetch` if value retrieval fails after names were
    /// confirmed, and `StoreError::PaginationOverflow` if the store's
    /// continuation token never clears.
    pub fn fetch(&self, prefix: &str) -> std::result::Result<Vec<ParameterEntry>, StoreError> {
        match self.strategy {
            Strategy::Path => self.fetch_by_path(prefix),
            Strategy::Enumerate => self.fetch_by_enumeration(prefix),
        }
    }

    fn fetch_by_path(&self, prefix: &str) -> std::result::Result<Vec<ParameterEntry>, StoreError> {
        let mut entries = Vec::new();
        let mut token: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let page = self.store.fetch_by_path(prefix, token.as_deref())?;
            entries.extend(page.entries);

            match page.next_token {
                Some(t) => token = Some(t),
                None => return Ok(entries),
            }
        }

        Err(StoreError::PaginationOverflow(MAX_PAGES))
    }

    fn fetch_by_enumeration(
        &self,
        prefix: &str,
    ) -> std::result::Result<Vec<ParameterEntry>, StoreError> {
        let names = self.store.list_names()?;
        let matching: Vec<String> = names
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect();

        // Skip the value fetch entirely on zero matches; the store
        // rejects an empty name list.
        if matching.is_empty() {
            debug!(prefix = %prefix, "no parameters under prefix");
            return Ok(Vec::new());
        }

        let mut entries = Vec::with_capacity(matching.len());
        for chunk in matching.chunks(MAX_BATCH) {
            entries.extend(self.store.fetch_by_names(chunk)?);
        }

        Ok(entries)
    }

    /// Fetch secrets under `prefix` and overlay them onto `base`.
    ///
    /// Each fetched key has the prefix stripped (first occurrence only)
    /// before insertion; fetched values win over `base` on collision.
    /// The input map is never mutated.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from [`Resolver::fetch`]; on error
    /// no partial merge is produced.
    pub fn resolve(
        &self,
        base: &ConfigMap,
        prefix: &str,
    ) -> std::result::Result<ConfigMap, StoreError> {
        let entries = self.fetch(prefix)?;
        debug!(prefix = %prefix, count = entries.len(), "fetched parameters");
        Ok(merge(base, prefix, entries))
    }

    /// Like [`Resolver::resolve`], but on any remote failure logs the
    /// error and returns a copy of `base` unchanged.
    ///
    /// This is the default policy: secrets are best-effort, never a
    /// startup dependency.
    pub fn resolve_or_base(&self, base: &ConfigMap, prefix: &str) -> ConfigMap {
        match self.resolve(base, prefix) {
            Ok(merged) => merged,
            Err(e) => {
                warn!(
                    prefix = %prefix,
                    error = %e,
                    "cannot fetch parameters; continuing with base environment"
                );
                base.clone()
            }
        }
    }
}

/// Overlay prefix-stripped entries onto a copy of the base map.
fn merge(base: &ConfigMap, prefix: &str, entries: Vec<ParameterEntry>) -> ConfigMap {
    let mut merged = base.clone();
    for entry in entries {
        let key = entry.key.replacen(prefix, "", 1);
        merged.insert(key, entry.value);
    }
    merged
}
