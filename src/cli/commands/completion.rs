//! completion command - Tab-completion scripts for the supported shells

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

/// Write the completion script for the requested shell to stdout.
///
/// Stdout carries only the script, so the output can be redirected
/// straight into the shell's configuration file.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator(shell), &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

/// The clap_complete generator matching a command-line shell choice.
fn generator(shell: Shell) -> clap_complete::Shell {
    match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
    }
}
