//! output::env
//!
//! Dotenv-style artifact: one `KEY="value"` line per record entry.

use std::path::{Path, PathBuf};

use crate::core::options::EnvOutput;
use crate::core::record::GitLog;

use super::{resolve_target, write_text, OutputError};

/// Default key prefix.
pub const DEFAULT_PREFIX: &str = "__GIT_";

/// Default artifact file name.
pub const DEFAULT_FILE_NAME: &str = ".env.git";

/// Dotenv lines for the record, newline-joined with no trailing newline.
///
/// Keys are the record keys uppercased behind the prefix; flags stringify
/// to `true`/`false`. Embedded double quotes are escaped as `\"`, the one
/// escape dotenv parsers agree on; values are otherwise verbatim.
pub fn env_content(log: &GitLog, options: &EnvOutput) -> String {
    let prefix = options.prefix.as_deref().unwrap_or(DEFAULT_PREFIX);
    log.iter()
        .map(|(key, value)| {
            format!(
                "{}{}=\"{}\"",
                prefix,
                key.to_uppercase(),
                escape_value(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the env artifact, returning the path written.
pub fn write_env(
    log: &GitLog,
    options: &EnvOutput,
    out_dir: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let file_name = options.file.as_deref().unwrap_or(DEFAULT_FILE_NAME);
    let path = resolve_target(out_dir, file_name);
    write_text(&path, &env_content(log, options))?;
    Ok(path)
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
