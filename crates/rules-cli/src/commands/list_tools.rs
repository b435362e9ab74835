//! List-tools command implementation

use std::path::Path;

use colored::Colorize;

use rules_core::ToolKind;

use crate::commands::prepare;
use crate::error::Result;

/// Run the list-tools command
///
/// Prints the effective tool list: name, destination path, and strategy.
pub fn run_list_tools(root: &Path, config: Option<&Path>) -> Result<()> {
    let manifest = prepare::load_manifest(root, config)?;

    for tool in manifest.tools() {
        let kind = match tool.kind {
            ToolKind::Dir => "dir ",
            ToolKind::File => "file",
        };
        println!(
            "  {} {} {}",
            kind.dimmed(),
            tool.name.cyan(),
            tool.path.dimmed()
        );
    }

    Ok(())
}
