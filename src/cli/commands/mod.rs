//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Assembles options from config files and command-line overrides
//! 2. Drives the resolver and the emitters
//! 3. Reports through the context's [`crate::ui::Reporter`]
//!
//! Handlers never query git or touch the filesystem themselves; that stays
//! behind [`crate::git`] and [`crate::output`].

mod completion;
mod emit;
mod fields;
mod show;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use emit::emit;
pub use fields::fields;
pub use show::show;

use std::path::Path;

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::options::Options;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Emit {
            fields,
            config,
            out_dir,
            json,
            window,
            env,
            types,
        } => emit::emit(
            ctx,
            &fields,
            config.as_deref(),
            out_dir.as_deref(),
            json,
            window,
            env,
            types,
        ),
        Command::Show { fields, config } => show::show(ctx, &fields, config.as_deref()),
        Command::Fields => fields::fields(),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Assemble options for a collecting command.
///
/// An explicitly named config file is loaded fatally; otherwise discovery
/// (env var, then local file) runs and absence falls back to defaults.
/// Command-line fields (trimmed entry by entry, so `-f "repo, branch"`
/// names two fields) and `--cwd` override whatever the file said.
fn load_options(ctx: &Context, fields: &[String], config: Option<&Path>) -> Result<Options> {
    let mut options = match config {
        Some(path) => Options::load(path)?,
        None => match Options::discover(ctx.cwd.as_deref())? {
            Some((path, options)) => {
                ctx.reporter.debug(format!("using config {}", path.display()));
                options
            }
            None => Options::default(),
        },
    };

    if !fields.is_empty() {
        options.fields = Some(fields.iter().map(|f| f.trim().to_string()).collect());
    }
    if ctx.cwd.is_some() {
        options.cwd = ctx.cwd.clone();
    }
    Ok(options)
}
