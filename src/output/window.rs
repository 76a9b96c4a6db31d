//! output::window
//!
//! Browser global script: a self-invoking artifact that assigns the record
//! to a `window` variable, so any page loading it can read build metadata
//! at runtime. The artifact is named after the variable (`<var>.js`), and
//! the write wrapper hands that name back for HTML injection.

use std::path::{Path, PathBuf};

use crate::core::options::WindowOutput;
use crate::core::record::GitLog;

use super::json::json_content;
use super::{resolve_target, write_text, OutputError};

/// Default browser global name.
pub const DEFAULT_VAR_NAME: &str = "__GIT_LOG__";

/// A written window script: where it landed, and the bare file name an
/// HTML pipeline references in a `<script src>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowArtifact {
    pub path: PathBuf,
    pub file_name: String,
}

/// The self-invoking assignment script.
///
/// Guarded on `typeof window` so the artifact is inert when imported
/// outside a browser; `log_to_console` adds a trace line after the
/// assignment.
pub fn window_content(log: &GitLog, options: &WindowOutput) -> Result<String, OutputError> {
    let var_name = options.var_name.as_deref().unwrap_or(DEFAULT_VAR_NAME);
    let json = json_content(log)?;

    let mut script = String::new();
    script.push_str("(function() {\n");
    script.push_str("  if (typeof window !== 'undefined') {\n");
    script.push_str(&format!("    window.{} = {};\n", var_name, json));
    if options.log_to_console {
        script.push_str(&format!("    console.log('[Git Log]', window.{});\n", var_name));
    }
    script.push_str("  }\n");
    script.push_str("})();\n");
    Ok(script)
}

/// Write the script as `<var>.js`, returning the artifact description.
pub fn write_window(
    log: &GitLog,
    options: &WindowOutput,
    out_dir: Option<&Path>,
) -> Result<WindowArtifact, OutputError> {
    let var_name = options.var_name.as_deref().unwrap_or(DEFAULT_VAR_NAME);
    let file_name = format!("{}.js", var_name);
    let path = resolve_target(out_dir, &file_name);
    write_text(&path, &window_content(log, options)?)?;
    Ok(WindowArtifact { path, file_name })
}
