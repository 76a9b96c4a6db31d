//! show command - Print the metadata record without writing files

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::git::Git;

/// Print the collected record as pretty JSON on stdout.
///
/// Stdout carries only the JSON so the output can be piped; the
/// empty-record warning goes to stderr and `{}` is still printed.
pub fn show(ctx: &Context, fields: &[String], config: Option<&Path>) -> Result<()> {
    let options = super::load_options(ctx, fields, config)?;
    let resolved = options.resolve();

    let git = Git::new(resolved.cwd.as_deref()).with_debug(ctx.reporter.is_debug());
    let log = git.collect(&resolved.fields);
    if log.is_empty() {
        ctx.reporter
            .warn("no git metadata collected (not a repository?)");
    }

    println!("{}", serde_json::to_string_pretty(&log)?);
    Ok(())
}
