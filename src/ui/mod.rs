//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Terminal reporting and display formatting
//!
//! # Design
//!
//! All terminal output from command handlers goes through this module so
//! that quiet and debug modes are honored consistently. Artifact content
//! never passes through here; emitters write files directly.

pub mod output;

pub use output::{Reporter, Verbosity};
