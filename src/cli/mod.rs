//! Command-line interface.

pub mod completions;
pub mod env;
pub mod keys;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::resolver::{Resolver, Strategy};
use crate::core::store::{ConfigMap, SsmStore};
use crate::error::Result;

/// Warren - run commands with parameter-store secrets in the environment.
#[derive(Parser)]
#[command(
    name = "warren",
    about = "Run commands with AWS SSM Parameter Store secrets injected as environment variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file (defaults to .warren.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with fetched secrets injected as env vars
    Run {
        /// Parameter path prefix (e.g. /myapp/prod/)
        #[arg(short, long)]
        prefix: Option<String>,
        /// Retrieval strategy: path or enumerate
        #[arg(long)]
        strategy: Option<Strategy>,
        /// Fail instead of falling back to the plain environment
        #[arg(long)]
        strict: bool,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Print the merged environment as dotenv lines
    Env {
        /// Parameter path prefix (e.g. /myapp/prod/)
        #[arg(short, long)]
        prefix: Option<String>,
        /// Retrieval strategy: path or enumerate
        #[arg(long)]
        strategy: Option<Strategy>,
        /// Fail instead of falling back to the plain environment
        #[arg(long)]
        strict: bool,
        /// Prefix each line with `export ` for shell eval
        #[arg(long)]
        export: bool,
    },

    /// List remote parameter names under the prefix
    Keys {
        /// Parameter path prefix (e.g. /myapp/prod/)
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Dispatch a parsed command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match command {
        Command::Run {
            prefix,
            strategy,
            strict,
            command,
        } => run::execute(&config, prefix.as_deref(), strategy, strict, &command),
        Command::Env {
            prefix,
            strategy,
            strict,
            export,
        } => env::execute(&config, prefix.as_deref(), strategy, strict, export),
        Command::Keys { prefix } => keys::execute(&config, prefix.as_deref()),
        Command::Completions { shell } => {
            completions::execute(shell);
            Ok(())
        }
    }
}

/// Resolve the merged environment for a command invocation.
///
/// Settings come together before the store is touched, so a missing
/// prefix never costs a network round-trip. In strict mode remote
/// failures surface as errors; otherwise the plain environment snapshot
/// is returned on failure.
fn resolve_merged(
    config: &Config,
    prefix: Option<&str>,
    strategy: Option<Strategy>,
    strict: bool,
) -> Result<ConfigMap> {
    let settings = config.settings(prefix, strategy, strict)?;
    let base = crate::core::env::snapshot();

    let store = SsmStore::connect()?;
    let resolver = Resolver::new(&store).with_strategy(settings.strategy);

    if settings.strict {
        Ok(resolver.resolve(&base, &settings.prefix)?)
    } else {
        Ok(resolver.resolve_or_base(&base, &settings.prefix))
    }
}
