//! End-to-end rule distribution tests
//!
//! Exercises the full engine against real temp directories: a mixed tool
//! list, nested source trees, and repeated runs.

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use rules_core::{ToolKind, ToolSpec, process_all};

fn tool(name: &str, path: std::path::PathBuf, kind: ToolKind) -> ToolSpec {
    ToolSpec::new(name, path.to_string_lossy(), kind)
}

/// Build a source tree resembling a real rules directory: top-level
/// markdown rules, a nested subdirectory, and a non-markdown stray file.
fn seed_rules(source: &std::path::Path) {
    std::fs::create_dir_all(source.join("frontend")).unwrap();
    std::fs::write(source.join("10-style.md"), "Prefer composition").unwrap();
    std::fs::write(source.join("20-naming.md"), "Use kebab-case files").unwrap();
    std::fs::write(source.join("frontend/components.md"), "One component per file").unwrap();
    std::fs::write(source.join("README.txt"), "not a rule").unwrap();
}

#[tokio::test]
async fn distributes_to_mixed_tool_list() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("rules");
    seed_rules(&source);

    let tools = vec![
        tool("Cline Code", dir.path().join(".clinerules"), ToolKind::Dir),
        tool("Claude Code", dir.path().join("CLAUDE.md"), ToolKind::File),
        tool("Codex", dir.path().join("AGENTS.md"), ToolKind::File),
        tool("Roo Code", dir.path().join(".roo/rules"), ToolKind::Dir),
    ];

    let summary = process_all(&source, &tools).await.unwrap();

    assert_eq!(summary.successful_tools, 4);
    // Only the two direct-child markdown files count toward the size
    assert_eq!(summary.total_bytes, ("Prefer composition".len() + "Use kebab-case files".len()) as u64);

    // Directory tools got the whole tree, stray file included
    for root in [dir.path().join(".clinerules"), dir.path().join(".roo/rules")] {
        assert!(root.join("10-style.md").exists());
        assert!(root.join("frontend/components.md").exists());
        assert!(root.join("README.txt").exists());
    }

    // File tools got the sorted bundle of direct-child markdown only
    let bundle = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert_eq!(
        bundle,
        "<!-- 10-style.md -->\n\nPrefer composition\n\n---\n\n<!-- 20-naming.md -->\n\nUse kebab-case files"
    );
    assert!(!bundle.contains("One component per file"));
}

#[tokio::test]
async fn rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("rules");
    seed_rules(&source);

    let tools = vec![
        tool("Cline Code", dir.path().join(".clinerules"), ToolKind::Dir),
        tool("Claude Code", dir.path().join("CLAUDE.md"), ToolKind::File),
    ];

    let first = process_all(&source, &tools).await.unwrap();
    let bundle_after_first = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();

    let second = process_all(&source, &tools).await.unwrap();
    let bundle_after_second = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();

    assert_eq!(first.successful_tools, second.successful_tools);
    assert_eq!(first.total_bytes, second.total_bytes);
    assert_eq!(bundle_after_first, bundle_after_second);
}

#[tokio::test]
async fn source_edits_propagate_on_rerun() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("rules");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::write(source.join("style.md"), "Use 4 spaces").unwrap();

    let tools = vec![tool("Claude Code", dir.path().join("CLAUDE.md"), ToolKind::File)];

    process_all(&source, &tools).await.unwrap();
    std::fs::write(source.join("style.md"), "Use 2 spaces").unwrap();
    process_all(&source, &tools).await.unwrap();

    let bundle = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert_eq!(bundle, "<!-- style.md -->\n\nUse 2 spaces");
}

#[tokio::test]
async fn missing_source_is_a_clean_zero_run() {
    let dir = tempdir().unwrap();

    let tools = vec![
        tool("Cline Code", dir.path().join(".clinerules"), ToolKind::Dir),
        tool("Claude Code", dir.path().join("CLAUDE.md"), ToolKind::File),
    ];

    let summary = process_all(&dir.path().join("absent"), &tools).await.unwrap();

    assert_eq!(summary.successful_tools, 0);
    assert_eq!(summary.total_bytes, 0);
    assert!(!dir.path().join(".clinerules").exists());
    assert!(!dir.path().join("CLAUDE.md").exists());
}
