//! output
//!
//! Artifact emission: serializing a collected record to disk.
//!
//! # Architecture
//!
//! Each emitter is a pure content function plus a thin write wrapper.
//! Content functions never touch the filesystem; write wrappers resolve the
//! target path, create parent directories, and write UTF-8 text. [`emit`]
//! orchestrates: it normalizes the artifact selection exactly once, then
//! dispatches in a fixed order (json, window, env, types).
//!
//! # Failure semantics
//!
//! Emission is the loud half of the pipeline. Any directory-creation or
//! write failure is a typed [`OutputError`] propagated to the caller, in
//! contrast to the best-effort acquisition side. Writes to the same path
//! are last-write-wins; nothing is staged or rolled back.

pub mod dts;
pub mod env;
pub mod json;
pub mod window;

pub use dts::{dts_content, write_dts};
pub use env::{env_content, write_env};
pub use json::{json_content, write_json};
pub use window::{window_content, write_window, WindowArtifact};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::options::OutputOptions;
use crate::core::record::GitLog;

/// Errors from materializing artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What an emission run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitReport {
    /// File name of the window script, when one was written. This is the
    /// name an HTML pipeline injects as a `<script src>`.
    pub window_file_name: Option<String>,

    /// Every artifact path written, in emission order.
    pub written: Vec<PathBuf>,
}

/// Emit every configured artifact for `log`.
///
/// The selection is normalized exactly once: enabling nothing means the
/// JSON default, enabling anything means exactly what was enabled. Relative
/// file names land under `out_dir` (or the process working directory);
/// absolute file names are honored as-is.
///
/// # Errors
///
/// The first failed write aborts the run; artifacts already written stay
/// on disk.
pub fn emit(
    log: &GitLog,
    outputs: &OutputOptions,
    out_dir: Option<&Path>,
) -> Result<EmitReport, OutputError> {
    let outputs = outputs.normalized();
    let mut report = EmitReport::default();

    if let Some(options) = &outputs.json {
        report.written.push(json::write_json(log, options, out_dir)?);
    }
    if let Some(options) = &outputs.window {
        let artifact = window::write_window(log, options, out_dir)?;
        report.window_file_name = Some(artifact.file_name);
        report.written.push(artifact.path);
    }
    if let Some(options) = &outputs.env {
        report.written.push(env::write_env(log, options, out_dir)?);
    }
    if let Some(options) = &outputs.types {
        report.written.push(dts::write_dts(log, options, out_dir)?);
    }

    Ok(report)
}

/// Resolve an artifact path: explicit absolute names win, relative names
/// land under the output directory.
pub(crate) fn resolve_target(out_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match out_dir {
        // join replaces the base when file_name is absolute.
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Create the parent directory (if any) and write UTF-8 text.
pub(crate) fn write_text(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, content).map_err(|source| OutputError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}
