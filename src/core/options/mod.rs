//! core::options
//!
//! Caller-supplied options: schema, validation, and file loading.
//!
//! # Loading precedence
//!
//! 1. An explicitly named file (CLI `--config`); any failure is fatal
//! 2. The file named by `$GITSTAMP_CONFIG`
//! 3. `gitstamp.toml` in the working directory
//! 4. Built-in defaults
//!
//! Config files are TOML; a `.json` extension switches to JSON with the
//! same schema. A file that is absent is not an error, a file that exists
//! but does not load is.

mod schema;

pub use schema::{
    EnvOutput, JsonOutput, Options, OutputOptions, ResolvedOptions, TypesOutput, WindowOutput,
};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "GITSTAMP_CONFIG";

/// Config file name discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitstamp.toml";

/// Errors from option loading and validation.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid option: {0}")]
    InvalidValue(String),
}

impl Options {
    /// Load and validate options from a file.
    ///
    /// The file is parsed as TOML unless its extension is `.json`.
    ///
    /// # Errors
    ///
    /// Read failures, parse failures, and invalid values are all fatal
    /// here; callers asked for this specific file.
    pub fn load(path: &Path) -> Result<Options, OptionsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| OptionsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let options: Options = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&raw).map_err(|err| OptionsError::ParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        } else {
            toml::from_str(&raw).map_err(|err| OptionsError::ParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        };
        options.validate()?;
        Ok(options)
    }

    /// Discover a config file without requiring one.
    ///
    /// Checks `$GITSTAMP_CONFIG`, then [`CONFIG_FILE_NAME`] under `cwd` (or
    /// the process working directory). Returns the path alongside the
    /// options so callers can report where settings came from.
    pub fn discover(cwd: Option<&Path>) -> Result<Option<(PathBuf, Options)>, OptionsError> {
        if let Ok(value) = std::env::var(CONFIG_ENV_VAR) {
            if !value.is_empty() {
                let path = PathBuf::from(value);
                let options = Options::load(&path)?;
                return Ok(Some((path, options)));
            }
        }

        let local = match cwd {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };
        if local.is_file() {
            let options = Options::load(&local)?;
            return Ok(Some((local, options)));
        }

        Ok(None)
    }
}
