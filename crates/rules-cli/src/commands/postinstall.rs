//! Postinstall command implementation

use std::path::Path;

use colored::Colorize;

use crate::commands::prepare;
use crate::error::Result;
use crate::runner::{CommandRunner, ShellRunner};

/// Run the postinstall command
///
/// Executes the manifest's `postinstall` hook commands plus any extras
/// supplied on the command line, then performs the same rule preparation
/// step as `prepare`. A failing hook aborts the run before any rules are
/// written.
pub async fn run_postinstall(
    root: &Path,
    source: Option<&Path>,
    config: Option<&Path>,
    extra_commands: &[String],
    json: bool,
) -> Result<()> {
    let manifest = prepare::load_manifest(root, config)?;

    let runner = ShellRunner { log: true };
    for command in manifest.postinstall.iter().chain(extra_commands) {
        println!("{} {}", "=>".blue().bold(), command);
        runner.run(command, root).await?;
    }

    prepare::run_prepare(root, source, config, json).await
}
