//! Merged environment export command.

use crate::core::config::Config;
use crate::core::env;
use crate::core::resolver::Strategy;
use crate::error::Result;

/// Print the merged environment to stdout.
///
/// Dotenv format by default; `export`-prefixed lines for shell eval.
pub fn execute(
    config: &Config,
    prefix: Option<&str>,
    strategy: Option<Strategy>,
    strict: bool,
    export: bool,
) -> Result<()> {
    let merged = super::resolve_merged(config, prefix, strategy, strict)?;

    let rendered = if export {
        env::to_exports(&merged)
    } else {
        env::to_dotenv(&merged)
    };
    print!("{}", rendered);

    Ok(())
}
