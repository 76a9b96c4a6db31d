//! cli
//!
//! Command-line interface layer for gitstamp.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT query git or write artifacts directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that drive [`crate::git`] for collection and [`crate::output`]
//! for emission. Every handler reports through [`crate::ui::Reporter`] so
//! quiet and debug modes behave the same everywhere.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::{Reporter, Verbosity};

/// Per-invocation context shared by every command handler.
pub struct Context {
    /// Working directory override from `--cwd`.
    pub cwd: Option<PathBuf>,
    /// Terminal reporter honoring `--quiet` and `--debug`.
    pub reporter: Reporter,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        reporter: Reporter::new(Verbosity::from_flags(cli.quiet, cli.debug)),
    };

    commands::dispatch(cli.command, &ctx)
}
