//! Gitstamp - stamp git metadata into build artifacts
//!
//! Gitstamp collects repository metadata (branch, commit, author, dirty
//! state, custom shell queries) at build time and materializes it as
//! machine-readable artifacts: a JSON file, a browser `window` script, a
//! dotenv fragment, and a TypeScript declaration.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Field vocabulary, options schema, and the metadata record
//! - [`git`] - Single interface for all Git operations
//! - [`output`] - Artifact emitters and the emission orchestrator
//! - [`ui`] - Terminal reporting utilities
//!
//! # Correctness Invariants
//!
//! Gitstamp maintains the following invariants:
//!
//! 1. Metadata acquisition is best-effort: a failed query degrades one
//!    field, never the run
//! 2. Artifact materialization is all-or-error: write failures propagate
//! 3. The record preserves request order; artifacts reflect it verbatim
//! 4. Output defaulting happens in exactly one place, before dispatch
//!
//! # Library use
//!
//! Build-tool adapters call [`stamp`] once per build:
//!
//! ```no_run
//! use gitstamp::core::options::Options;
//!
//! # fn main() -> Result<(), gitstamp::output::OutputError> {
//! let report = gitstamp::stamp(&Options::default().resolve(), None)?;
//! for path in &report.written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod output;
pub mod ui;

use std::path::Path;

use crate::core::options::ResolvedOptions;
use crate::git::Git;
use crate::output::{EmitReport, OutputError};

/// Collect and emit in one call.
///
/// Fields are resolved against the repository at `options.cwd`, then the
/// configured artifacts are written into `out_dir` (falling back to
/// `options.cwd`, then the process working directory). Outside a
/// repository the record is empty and the artifacts reflect that; the
/// call still succeeds.
///
/// # Errors
///
/// Only materialization fails: directory creation or file writes that go
/// wrong surface as [`OutputError`].
pub fn stamp(options: &ResolvedOptions, out_dir: Option<&Path>) -> Result<EmitReport, OutputError> {
    let git = Git::new(options.cwd.as_deref());
    let log = git.collect(&options.fields);
    let target = out_dir.or(options.cwd.as_deref());
    output::emit(&log, &options.outputs, target)
}
