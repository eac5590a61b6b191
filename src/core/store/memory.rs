//! In-memory parameter store.
//!
//! A fake used by tests and benchmarks in place of the real remote
//! store. Mimics the remote API's quirks: paginated path retrieval,
//! a batch size cap on value fetches, and rejection of empty name
//! lists. Failures can be injected per operation, and call counts are
//! recorded so tests can assert which calls were (not) made.

use std::cell::Cell;

use super::{ParameterEntry, ParameterPage, ParameterStore, MAX_BATCH};
use crate::error::StoreError;

/// In-memory [`ParameterStore`] fake.
pub struct MemoryStore {
    entries: Vec<ParameterEntry>,
    page_size: usize,
    fail_list: bool,
    fail_fetch: bool,
    sticky_token: bool,
    list_calls: Cell<usize>,
    fetch_calls: Cell<usize>,
}

impl MemoryStore {
    /// Create a store seeded with the given entries.
    pub fn new(entries: Vec<ParameterEntry>) -> Self {
        Self {
            entries,
            page_size: MAX_BATCH,
            fail_list: false,
            fail_fetch: false,
            sticky_token: false,
            list_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
        }
    }

    /// Create a store from `(key, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(k, v)| ParameterEntry::new(*k, *v))
                .collect(),
        )
    }

    /// Set the page size used by path retrieval.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        self.page_size = page_size;
        self
    }

    /// Make `list_names` fail.
    #[must_use]
    pub fn fail_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `fetch_by_names` and `fetch_by_path` fail.
    #[must_use]
    pub fn fail_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Simulate a buggy store whose continuation token never clears.
    #[must_use]
    pub fn with_sticky_token(mut self) -> Self {
        self.sticky_token = true;
        self
    }

    /// Number of `list_names` calls made so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    /// Number of value-fetch calls (by name or by path) made so far.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }
}

impl ParameterStore for MemoryStore {
    fn list_names(&self) -> std::result::Result<Vec<String>, StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);

        if self.fail_list {
            return Err(StoreError::Enumeration("injected listing failure".into()));
        }

        Ok(self.entries.iter().map(|e| e.key.clone()).collect())
    }

    fn fetch_by_names(
        &self,
        names: &[String],
    ) -> std::result::Result<Vec<ParameterEntry>, StoreError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        if self.fail_fetch {
            return Err(StoreError::Fetch("injected fetch failure".into()));
        }
        // The real API rejects both an empty list and oversized batches.
        if names.is_empty() {
            return Err(StoreError::Fetch("empty name list".into()));
        }
        if names.len() > MAX_BATCH {
            return Err(StoreError::Fetch(format!(
                "batch of {} exceeds the {} name limit",
                names.len(),
                MAX_BATCH
            )));
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| names.contains(&e.key))
            .cloned()
            .collect())
    }

    fn fetch_by_path(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> std::result::Result<ParameterPage, StoreError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        if self.fail_fetch {
            return Err(StoreError::Fetch("injected fetch failure".into()));
        }

        let matching: Vec<&ParameterEntry> = self
            .entries
            .iter()
            .filter(|e| e.key.starts_with(path))
            .collect();

        let start: usize = match token {
            Some(t) => t
                .parse()
                .map_err(|_| StoreError::Fetch(format!("bad continuation token: {:?}", t)))?,
            None => 0,
        };

        if self.sticky_token {
            // Return the first page forever, token never clearing.
            let entries = matching
                .iter()
                .take(self.page_size)
                .map(|e| (*e).clone())
                .collect();
            return Ok(ParameterPage {
                entries,
                next_token: Some("0".to_string()),
            });
        }

        let end = usize::min(start + self.page_size, matching.len());
        let entries = matching[start..end].iter().map(|e| (*e).clone()).collect();
        let next_token = (end < matching.len()).then(|| end.to_string());

        Ok(ParameterPage {
            entries,
            next_token,
        })
    }
}
