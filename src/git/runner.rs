//! git::runner
//!
//! The one place that spawns subprocesses.
//!
//! # Architecture
//!
//! Every external command this crate runs, the built-in git queries and
//! caller-supplied `custom:` commands alike, goes through the
//! [`CommandRunner`] trait. The resolver takes the runner as a type
//! parameter, so tests drive it with a scripted runner and never need git
//! on the machine.
//!
//! Commands are shell strings, not argv vectors, because custom fields are
//! caller-written one-liners; [`SystemRunner`] hands them to the platform
//! shell (`sh -c`, or `cmd /C` on Windows).

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The command could not be started at all.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully.
    #[error("command '{command}' exited with status {status}: {stderr}")]
    Failed {
        command: String,
        status: i32,
        stderr: String,
    },
}

/// Runs an external command and captures its standard output.
pub trait CommandRunner {
    /// Run `command`, optionally in `cwd`, returning trimmed stdout.
    ///
    /// # Errors
    ///
    /// Any failure to produce output, spawn errors and non-zero exits
    /// alike, is an `Err`. Callers decide whether that is fatal; the field
    /// resolver treats it as "no value".
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<String, RunnerError>;
}

/// Production runner: executes through the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<String, RunnerError> {
        let mut shell = shell_command(command);
        if let Some(dir) = cwd {
            shell.current_dir(dir);
        }
        let output = shell.output().map_err(|source| RunnerError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(RunnerError::Failed {
                command: command.to_string(),
                // Signal deaths have no exit code.
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.arg("-c").arg(command);
    shell
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").arg(command);
    shell
}
