//! Keys listing command.
//!
//! Shows which remote parameter names fall under the configured prefix
//! without fetching any values.

use crate::core::config::Config;
use crate::core::store::{ParameterStore, SsmStore};
use crate::error::Result;

use super::output;

/// List remote parameter names under the prefix.
pub fn execute(config: &Config, prefix: Option<&str>) -> Result<()> {
    let settings = config.settings(prefix, None, false)?;

    let store = SsmStore::connect()?;
    let names = store.list_names()?;

    let mut matching: Vec<String> = names
        .into_iter()
        .filter(|name| name.starts_with(&settings.prefix))
        .collect();
    matching.sort();

    if matching.is_empty() {
        output::warn(&format!("no parameters under {}", settings.prefix));
        return Ok(());
    }

    output::header(&format!("parameters under {}", settings.prefix));
    for name in &matching {
        println!("  {}", name);
    }

    Ok(())
}
