//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. Every repository read flows
//! through [`Git`], which shells out through a [`CommandRunner`]. No other
//! module spawns processes or parses `.git` internals.
//!
//! Shelling out (rather than linking a libgit2 binding) keeps the reported
//! values identical to what the `git` on the build machine would print,
//! including its config, alias and worktree handling.
//!
//! # Responsibilities
//!
//! - Repository detection
//! - Per-field metadata resolution (branch, commit, author, tag, ...)
//! - Remote URL parsing into a short repository name
//! - Custom command execution for user-defined fields
//!
//! # Invariants
//!
//! - Field resolution never fails the caller: a field whose command errors
//!   resolves to an empty value and the rest of the collection proceeds
//! - No other module calls `std::process::Command` directly
//!
//! # Example
//!
//! ```ignore
//! use gitstamp::core::field::GitField;
//! use gitstamp::git::Git;
//!
//! let git = Git::new(None);
//! if git.is_repository() {
//!     let log = git.collect(&[GitField::Branch, GitField::Commit]);
//!     println!("{}", serde_json::to_string(&log)?);
//! }
//! ```

pub mod resolver;
pub mod runner;

pub use resolver::Git;
pub use runner::{CommandRunner, RunnerError, SystemRunner};
