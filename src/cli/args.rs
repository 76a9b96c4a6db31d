//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>` / `-C <path>`: Run as if in that directory
//! - `--debug`: Enable debug tracing
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gitstamp - stamp git metadata into build artifacts
#[derive(Parser, Debug)]
#[command(name = "gitstamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitstamp was started in this directory
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug tracing
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect git metadata and write the configured artifacts
    #[command(
        name = "emit",
        long_about = "Collect git metadata and write the configured artifacts.\n\n\
            This is the main command. It resolves the requested fields against the \
            repository, then writes every configured artifact (JSON, window script, \
            dotenv, TypeScript declaration) into the output directory. With no \
            configuration at all it writes git-log.json with the default field set.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Write git-log.json with the default fields
    gitstamp emit

    # Pick fields and write the dotenv artifact instead
    gitstamp emit -f branch,commitShort,isDirty --env

    # Every artifact, into the bundler's asset directory
    gitstamp emit --json --window --env --types -o dist

    # Drive everything from a config file
    gitstamp emit -c gitstamp.toml

OUTSIDE A REPOSITORY:
    emit warns on stderr and exits 0 without writing anything, so it is
    safe to leave in build scripts that also run from source tarballs."
    )]
    Emit {
        /// Fields to collect (comma-separated; see 'gitstamp fields')
        #[arg(short, long, value_delimiter = ',', value_name = "FIELDS")]
        fields: Vec<String>,

        /// Config file (TOML, or JSON by extension)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Directory to write artifacts into
        #[arg(short, long, value_name = "PATH")]
        out_dir: Option<PathBuf>,

        /// Write the JSON artifact with default settings
        #[arg(long)]
        json: bool,

        /// Write the window script artifact with default settings
        #[arg(long)]
        window: bool,

        /// Write the dotenv artifact with default settings
        #[arg(long)]
        env: bool,

        /// Write the TypeScript declaration artifact with default settings
        #[arg(long)]
        types: bool,
    },

    /// Print the collected metadata record as JSON
    #[command(
        name = "show",
        long_about = "Print the collected metadata record as pretty JSON on stdout.\n\n\
            Useful for checking what a build would embed before wiring gitstamp \
            into it. Prints {} outside a repository.",
        after_help = "\
WORKFLOW EXAMPLES:
    # See the default record
    gitstamp show

    # Check a single field
    gitstamp show -f branch

    # Feed a script
    gitstamp show | jq -r .commit"
    )]
    Show {
        /// Fields to collect (comma-separated; see 'gitstamp fields')
        #[arg(short, long, value_delimiter = ',', value_name = "FIELDS")]
        fields: Vec<String>,

        /// Config file (TOML, or JSON by extension)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// List the built-in field names
    #[command(
        name = "fields",
        long_about = "List every built-in field name, one per line.\n\n\
            These are the names accepted by --fields and by the 'fields' config \
            key. A request starting with 'custom:' is not listed here; it runs \
            the rest of the string as a shell command instead.",
        after_help = "\
WORKFLOW EXAMPLES:
    # See what can be collected
    gitstamp fields

    # Collect everything gitstamp knows about
    gitstamp emit -f \"$(gitstamp fields | paste -sd, -)\""
    )]
    Fields,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for gitstamp \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    gitstamp completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    gitstamp completion zsh >> ~/.zshrc

    # Fish
    gitstamp completion fish > ~/.config/fish/completions/gitstamp.fish

    # PowerShell
    gitstamp completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    // Spelled the way the completion ecosystem spells it, not kebab-cased.
    #[value(name = "powershell")]
    PowerShell,
}
