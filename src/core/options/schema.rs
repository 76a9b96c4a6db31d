//! core::options::schema
//!
//! The option schema shared by config files, CLI flags, and library
//! callers.
//!
//! # Shape
//!
//! ```toml
//! fields = ["repo", "branch", "commit", "isDirty"]
//!
//! [outputs.json]
//! file_name = "git-log.json"
//!
//! [outputs.window]
//! var_name = "__GIT_LOG__"
//! log_to_console = true
//!
//! [outputs.env]
//! prefix = "__GIT_"
//! file = ".env.git"
//!
//! [outputs.types]
//! file_name = "git-log.d.ts"
//! ```
//!
//! Every knob is optional. [`Options::resolve`] collapses the optional
//! layer into [`ResolvedOptions`]; [`OutputOptions::normalized`] is the one
//! explicit defaulting step for artifact selection and runs inside the
//! emission orchestrator, not here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::field::GitField;

use super::OptionsError;

/// Caller-supplied options, everything optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Fields to request. Unknown names are ignored; `None` means the
    /// default request list.
    pub fields: Option<Vec<String>>,

    /// Which artifacts to produce. `None` (like an empty table) normalizes
    /// to the JSON default at emission time.
    pub outputs: Option<OutputOptions>,

    /// Working directory for repository queries, and the fallback output
    /// directory. `None` means the process working directory.
    pub cwd: Option<PathBuf>,
}

impl Options {
    /// Check every value that could silently corrupt an artifact.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::InvalidValue` describing the first offender.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(outputs) = &self.outputs {
            outputs.validate()?;
        }
        Ok(())
    }

    /// Collapse the optional layer into concrete settings.
    ///
    /// Missing `fields` become [`GitField::DEFAULT`]; unknown field names
    /// are dropped. Missing `outputs` become an empty selection (the JSON
    /// default is applied later, during emission).
    pub fn resolve(self) -> ResolvedOptions {
        let fields = match self.fields {
            Some(names) => GitField::parse_many(&names),
            None => GitField::DEFAULT.to_vec(),
        };
        ResolvedOptions {
            fields,
            outputs: self.outputs.unwrap_or_default(),
            cwd: self.cwd,
        }
    }
}

/// Options after resolution: defaults applied, field names narrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub fields: Vec<GitField>,
    pub outputs: OutputOptions,
    pub cwd: Option<PathBuf>,
}

/// Artifact selection. Each present table enables one emitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    pub json: Option<JsonOutput>,
    pub window: Option<WindowOutput>,
    pub env: Option<EnvOutput>,
    pub types: Option<TypesOutput>,
}

impl OutputOptions {
    /// Whether no emitter is enabled.
    pub fn is_empty(&self) -> bool {
        self.json.is_none() && self.window.is_none() && self.env.is_none() && self.types.is_none()
    }

    /// The one explicit defaulting step: a selection that enables nothing
    /// becomes the JSON-only default. Anything else passes through
    /// unchanged.
    pub fn normalized(&self) -> OutputOptions {
        if self.is_empty() {
            OutputOptions {
                json: Some(JsonOutput::default()),
                ..OutputOptions::default()
            }
        } else {
            self.clone()
        }
    }

    /// Validate every enabled emitter's settings.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(json) = &self.json {
            if let Some(file_name) = &json.file_name {
                validate_file_name("outputs.json.file_name", file_name)?;
            }
        }
        if let Some(window) = &self.window {
            if let Some(var_name) = &window.var_name {
                validate_var_name(var_name)?;
            }
        }
        if let Some(env) = &self.env {
            if let Some(prefix) = &env.prefix {
                validate_env_prefix(prefix)?;
            }
            if let Some(file) = &env.file {
                validate_file_name("outputs.env.file", file)?;
            }
        }
        if let Some(types) = &self.types {
            if let Some(file_name) = &types.file_name {
                validate_file_name("outputs.types.file_name", file_name)?;
            }
        }
        Ok(())
    }
}

/// JSON artifact options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonOutput {
    /// Artifact file name; default `git-log.json`.
    pub file_name: Option<String>,
}

/// Browser global script options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowOutput {
    /// Global variable name; default `__GIT_LOG__`. Must be a valid
    /// JavaScript identifier. The artifact is named `<var_name>.js`.
    pub var_name: Option<String>,

    /// Also emit a `console.log` trace line from the script.
    pub log_to_console: bool,
}

/// Dotenv-style artifact options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvOutput {
    /// Key prefix; default `__GIT_`.
    pub prefix: Option<String>,

    /// Artifact file name; default `.env.git`.
    pub file: Option<String>,
}

/// TypeScript declaration artifact options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypesOutput {
    /// Artifact file name; default `git-log.d.ts`.
    pub file_name: Option<String>,
}

fn validate_file_name(context: &str, name: &str) -> Result<(), OptionsError> {
    if name.trim().is_empty() {
        return Err(OptionsError::InvalidValue(format!(
            "{} must not be empty",
            context
        )));
    }
    Ok(())
}

/// The variable name lands unquoted in generated JavaScript, so it must be
/// a plain identifier.
fn validate_var_name(name: &str) -> Result<(), OptionsError> {
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if head_ok && tail_ok {
        Ok(())
    } else {
        Err(OptionsError::InvalidValue(format!(
            "outputs.window.var_name must be a JavaScript identifier, got '{}'",
            name
        )))
    }
}

/// The prefix lands verbatim on the left of `KEY="value"` lines.
fn validate_env_prefix(prefix: &str) -> Result<(), OptionsError> {
    let corrupting = prefix
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '=');
    if corrupting {
        return Err(OptionsError::InvalidValue(format!(
            "outputs.env.prefix must not contain whitespace, '\"', or '=', got '{}'",
            prefix
        )));
    }
    Ok(())
}
