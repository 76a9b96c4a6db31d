//! output::dts
//!
//! TypeScript declaration artifact: an exported interface describing the
//! record, one property per entry. Pages that consume the window script or
//! the JSON artifact import this for typing.

use std::path::{Path, PathBuf};

use crate::core::options::TypesOutput;
use crate::core::record::{FieldValue, GitLog};

use super::{resolve_target, write_text, OutputError};

/// Default artifact file name.
pub const DEFAULT_FILE_NAME: &str = "git-log.d.ts";

/// Name of the generated interface.
pub const INTERFACE_NAME: &str = "GitLog";

/// The interface declaration, with a trailing newline.
///
/// Property names are record keys verbatim and typed by the value that was
/// collected: `string` for text, `boolean` for flags.
pub fn dts_content(log: &GitLog) -> String {
    let mut out = String::new();
    out.push_str(&format!("export interface {} {{\n", INTERFACE_NAME));
    for (key, value) in log.iter() {
        let ty = match value {
            FieldValue::String(_) => "string",
            FieldValue::Bool(_) => "boolean",
        };
        out.push_str(&format!("  {}: {}\n", key, ty));
    }
    out.push_str("}\n");
    out
}

/// Write the declaration artifact, returning the path written.
pub fn write_dts(
    log: &GitLog,
    options: &TypesOutput,
    out_dir: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let file_name = options.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME);
    let path = resolve_target(out_dir, file_name);
    write_text(&path, &dts_content(log))?;
    Ok(path)
}
