//! emit command - Collect metadata and write artifacts

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::core::options::{EnvOutput, JsonOutput, OutputOptions, TypesOutput, WindowOutput};
use crate::git::Git;
use crate::output;

/// Collect git metadata and write the configured artifacts.
///
/// Outside a repository (or with nothing to collect) this warns and exits
/// cleanly without writing anything, so an emit wired into a build script
/// does not fail builds running from source tarballs.
#[allow(clippy::too_many_arguments)]
pub fn emit(
    ctx: &Context,
    fields: &[String],
    config: Option<&Path>,
    out_dir: Option<&Path>,
    json: bool,
    window: bool,
    env: bool,
    types: bool,
) -> Result<()> {
    let mut options = super::load_options(ctx, fields, config)?;
    if let Some(toggled) = toggled_outputs(json, window, env, types) {
        options.outputs = Some(toggled);
    }
    let resolved = options.resolve();

    let git = Git::new(resolved.cwd.as_deref()).with_debug(ctx.reporter.is_debug());
    let log = git.collect(&resolved.fields);
    if log.is_empty() {
        ctx.reporter
            .warn("no git metadata collected (not a repository?); no artifacts written");
        return Ok(());
    }
    ctx.reporter.debug(format!("collected {} field(s)", log.len()));

    let target = out_dir.or(resolved.cwd.as_deref());
    let report = output::emit(&log, &resolved.outputs, target)?;
    for path in &report.written {
        ctx.reporter.info(format!("wrote {}", path.display()));
    }
    Ok(())
}

/// Turn the command-line toggles into an output selection, or `None` when
/// no toggle was given and the config's selection stands.
fn toggled_outputs(json: bool, window: bool, env: bool, types: bool) -> Option<OutputOptions> {
    if !(json || window || env || types) {
        return None;
    }
    Some(OutputOptions {
        json: json.then(JsonOutput::default),
        window: window.then(WindowOutput::default),
        env: env.then(EnvOutput::default),
        types: types.then(TypesOutput::default),
    })
}
