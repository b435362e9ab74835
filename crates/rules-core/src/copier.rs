//! Recursive rule directory copying

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::fs;
use tokio::task::JoinSet;
use tracing::warn;

use crate::{Error, Result};

/// Deep-copy a source directory tree into a destination directory tree.
///
/// Returns the number of files copied. A missing source is reported as a
/// warning and yields 0. The copy is a merge: existing destination files
/// are overwritten, files present only at the destination are left alone.
///
/// Sibling entries at each directory level are copied concurrently; the
/// count is summed after every task at that level completes. Any single
/// copy or create failure fails the whole call.
pub async fn copy_tree(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<u64> {
    copy_dir(
        source.as_ref().to_path_buf(),
        destination.as_ref().to_path_buf(),
    )
    .await
}

/// Boxed recursion so the async fan-out can descend into subdirectories.
fn copy_dir(
    source: PathBuf,
    destination: PathBuf,
) -> Pin<Box<dyn Future<Output = Result<u64>> + Send>> {
    Box::pin(async move {
        if !fs::try_exists(&source)
            .await
            .map_err(|e| Error::io(&source, e))?
        {
            warn!(source = %source.display(), "source folder does not exist");
            return Ok(0);
        }

        // Destination must exist before any write into it
        fs::create_dir_all(&destination)
            .await
            .map_err(|e| Error::io(&destination, e))?;

        let mut entries = fs::read_dir(&source)
            .await
            .map_err(|e| Error::io(&source, e))?;

        let mut tasks: JoinSet<Result<u64>> = JoinSet::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io(&source, e))?
        {
            let from = entry.path();
            let to = destination.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::io(&from, e))?;

            tasks.spawn(async move {
                if file_type.is_dir() {
                    copy_dir(from, to).await
                } else {
                    fs::copy(&from, &to)
                        .await
                        .map_err(|e| Error::io(&from, e))?;
                    Ok(1)
                }
            });
        }

        let mut copied = 0;
        while let Some(joined) = tasks.join_next().await {
            copied += joined??;
        }

        Ok(copied)
    })
}
