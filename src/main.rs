//! Warren - run commands with parameter-store secrets in the environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warren::cli::output;
use warren::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("WARREN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("warren=debug")
        } else {
            EnvFilter::new("warren=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        // Format error with suggestion if available
        let suggestion = match &e {
            warren::error::Error::Config(warren::error::ConfigError::MissingPrefix) => {
                Some("pass --prefix or set fetch.prefix in .warren.toml")
            }
            warren::error::Error::Store(_) => {
                Some("check AWS credentials and region, or drop --strict to fall back")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
