//! Source size accounting

use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::{Error, Result};

/// Sum the byte sizes of markdown files directly under `source`.
///
/// Non-recursive: only regular files whose names end in `.md` count.
/// Subdirectories and files like `notes.md.bak` are excluded. A missing
/// source directory is reported as a warning and yields 0.
pub async fn total_markdown_bytes(source: impl AsRef<Path>) -> Result<u64> {
    let source = source.as_ref();

    if !fs::try_exists(source)
        .await
        .map_err(|e| Error::io(source, e))?
    {
        warn!(source = %source.display(), "source directory does not exist");
        return Ok(0);
    }

    let mut entries = fs::read_dir(source)
        .await
        .map_err(|e| Error::io(source, e))?;

    let mut total = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io(source, e))?
    {
        let name = entry.file_name();
        let metadata = entry
            .metadata()
            .await
            .map_err(|e| Error::io(entry.path(), e))?;
        if metadata.is_file() && name.to_string_lossy().ends_with(".md") {
            total += metadata.len();
        }
    }

    Ok(total)
}
