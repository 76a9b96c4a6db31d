//! output::json
//!
//! JSON artifact: the record pretty-printed, insertion order preserved.

use std::path::{Path, PathBuf};

use crate::core::options::JsonOutput;
use crate::core::record::GitLog;

use super::{resolve_target, write_text, OutputError};

/// Default JSON artifact file name.
pub const DEFAULT_FILE_NAME: &str = "git-log.json";

/// Two-space pretty JSON for the record, no trailing newline.
pub fn json_content(log: &GitLog) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(log)?)
}

/// Write the JSON artifact, returning the path written.
pub fn write_json(
    log: &GitLog,
    options: &JsonOutput,
    out_dir: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let file_name = options.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME);
    let path = resolve_target(out_dir, file_name);
    write_text(&path, &json_content(log)?)?;
    Ok(path)
}
