//! Prepare command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;

use rules_core::config::{MANIFEST_FILE, Manifest};
use rules_core::{BatchSummary, process_all};

use crate::error::Result;

/// Resolve the manifest from an explicit path or the root's `rules.toml`.
pub(crate) fn load_manifest(root: &Path, config: Option<&Path>) -> Result<Manifest> {
    let manifest_path = config
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(MANIFEST_FILE));
    Ok(Manifest::load_or_default(&manifest_path)?)
}

/// Run the prepare command
///
/// Distributes rules from the source directory to every configured tool
/// and prints a summary (human-readable or JSON).
pub async fn run_prepare(
    root: &Path,
    source: Option<&Path>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let manifest = load_manifest(root, config)?;

    let source_dir: PathBuf = match source {
        Some(path) => path.to_path_buf(),
        None => root.join(manifest.source_dir()),
    };
    let tools = manifest.tools();

    let summary = process_all(&source_dir, &tools).await?;
    print_summary(&summary, json)?;

    Ok(())
}

fn print_summary(summary: &BatchSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!(
            "{} Rules preparation completed: {} tools configured, {} bytes total.",
            "OK".green().bold(),
            summary.successful_tools.to_string().cyan(),
            summary.total_bytes.to_string().cyan()
        );
    }
    Ok(())
}
