//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use super::Cli;

/// Write completions for the given shell to stdout.
pub fn execute(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "warren", &mut std::io::stdout());
}
