//! Run command.
//!
//! Executes a command with the merged environment: the process
//! environment snapshot overlaid with fetched secrets.

use crate::core::config::Config;
use crate::core::resolver::Strategy;
use crate::error::Result;

/// Run a command with the merged environment.
pub fn execute(
    config: &Config,
    prefix: Option<&str>,
    strategy: Option<Strategy>,
    strict: bool,
    command: &[String],
) -> Result<()> {
    if command.is_empty() {
        return Err(crate::error::Error::Other(
            "no command specified".to_string(),
        ));
    }

    let merged = super::resolve_merged(config, prefix, strategy, strict)?;

    // The child sees exactly the merged map, nothing inherited on the side.
    let status = std::process::Command::new(&command[0])
        .args(&command[1..])
        .env_clear()
        .envs(&merged)
        .status()?;

    std::process::exit(status.code().unwrap_or(1));
}
