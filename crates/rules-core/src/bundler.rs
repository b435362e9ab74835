//! Markdown bundling
//!
//! Combines the markdown files directly under a source directory into one
//! output file. Each file becomes a block of the form
//! `<!-- {filename} -->\n\n{trimmed content}`, blocks are joined with
//! `\n\n---\n\n`, and the result replaces the destination file's content.

use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::{Error, Result, io};

const SEPARATOR: &str = "\n\n---\n\n";

/// Bundle the `.md` files directly under `source` into `destination_file`.
///
/// Returns the number of files bundled. A missing source or an empty rule
/// set is reported as a warning and yields 0 without touching the
/// destination. Filenames are sorted lexicographically before bundling so
/// the output is identical across platforms.
pub async fn bundle(
    source: impl AsRef<Path>,
    destination_file: impl AsRef<Path>,
) -> Result<u64> {
    let source = source.as_ref();
    let destination_file = destination_file.as_ref();

    if !fs::try_exists(source)
        .await
        .map_err(|e| Error::io(source, e))?
    {
        warn!(source = %source.display(), "source directory does not exist");
        return Ok(0);
    }

    // Destinations like "CLAUDE.md" have an empty parent component
    if let Some(parent) = destination_file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    let mut entries = fs::read_dir(source)
        .await
        .map_err(|e| Error::io(source, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io(source, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") {
            names.push(name);
        }
    }

    if names.is_empty() {
        warn!(source = %source.display(), "no .md files found");
        return Ok(0);
    }

    // Sort for deterministic output regardless of filesystem listing order
    names.sort();

    let mut blocks = Vec::with_capacity(names.len());
    for name in &names {
        let path = source.join(name);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        blocks.push(format!("<!-- {} -->\n\n{}", name, content.trim()));
    }

    io::write_atomic(destination_file, blocks.join(SEPARATOR).as_bytes())?;

    Ok(names.len() as u64)
}
