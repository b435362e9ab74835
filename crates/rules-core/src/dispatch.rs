//! Per-tool dispatch
//!
//! Routes one tool to the copier or the bundler based on its declared kind
//! and emits uniform start/success/info notices. External callers go through
//! [`process_tool`] rather than calling the copier or bundler directly so
//! every tool gets the same reporting.

use std::path::Path;

use tracing::info;

use crate::tool::{ToolKind, ToolSpec};
use crate::{Result, bundler, copier};

/// Process rules for a single tool and return the file count.
///
/// Directory tools get a recursive copy of the source tree; file tools get
/// a single bundled markdown file. A zero count (missing source, empty rule
/// set) is a valid outcome, not an error.
pub async fn process_tool(source: &Path, tool: &ToolSpec) -> Result<u64> {
    let count = match tool.kind {
        ToolKind::Dir => {
            info!(tool = %tool.name, "copying rules");
            copier::copy_tree(source, &tool.path).await?
        }
        ToolKind::File => {
            info!(tool = %tool.name, "bundling rules");
            bundler::bundle(source, &tool.path).await?
        }
    };

    if count > 0 {
        info!(tool = %tool.name, files = count, destination = %tool.path, "rules written");
    } else {
        info!(tool = %tool.name, destination = %tool.path, "nothing to process");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_source_returns_zero_for_dir_kind() {
        let dir = tempdir().unwrap();
        let tool = ToolSpec::new(
            "Roo Code",
            dir.path().join("out").to_string_lossy(),
            ToolKind::Dir,
        );

        let count = process_tool(&dir.path().join("absent"), &tool).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn missing_source_returns_zero_for_file_kind() {
        let dir = tempdir().unwrap();
        let tool = ToolSpec::new(
            "Claude Code",
            dir.path().join("CLAUDE.md").to_string_lossy(),
            ToolKind::File,
        );

        let count = process_tool(&dir.path().join("absent"), &tool).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn routes_dir_tool_to_copier() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("rules");
        std::fs::create_dir_all(source.join("sub")).unwrap();
        std::fs::write(source.join("a.md"), "a").unwrap();
        std::fs::write(source.join("sub/b.md"), "b").unwrap();

        let destination = dir.path().join(".clinerules");
        let tool = ToolSpec::new("Cline Code", destination.to_string_lossy(), ToolKind::Dir);

        let count = process_tool(&source, &tool).await.unwrap();

        assert_eq!(count, 2);
        assert!(destination.join("a.md").exists());
        assert!(destination.join("sub/b.md").exists());
    }

    #[tokio::test]
    async fn routes_file_tool_to_bundler() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("rules");
        std::fs::create_dir_all(&source).unwrap();
        std::fs::write(source.join("a.md"), "a").unwrap();

        let destination = dir.path().join("CLAUDE.md");
        let tool = ToolSpec::new("Claude Code", destination.to_string_lossy(), ToolKind::File);

        let count = process_tool(&source, &tool).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            std::fs::read_to_string(&destination).unwrap(),
            "<!-- a.md -->\n\na"
        );
    }
}
