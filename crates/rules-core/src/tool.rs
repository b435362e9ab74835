//! Tool configuration model
//!
//! A [`ToolSpec`] describes one consumer of the rule set: where its rules
//! live on disk and whether it expects a directory of files or a single
//! bundled file. The list is static configuration; it is defined once and
//! passed explicitly into the orchestrator.

use serde::{Deserialize, Serialize};

/// Output strategy for a tool destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Destination is a directory root; rules are deep-copied into it.
    Dir,
    /// Destination is a single file; rules are bundled into it.
    File,
}

/// Configuration for one tool that consumes rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Display label used in log output
    pub name: String,
    /// Filesystem destination (directory root or file path per `kind`)
    pub path: String,
    /// Selects the copy vs. bundle strategy
    pub kind: ToolKind,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: ToolKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }
}

/// The built-in tool list.
///
/// Deployment configuration, not protocol: any list of valid `ToolSpec`
/// values works. Destinations must be pairwise disjoint, the batch
/// orchestrator relies on that to run tools concurrently without locking.
pub fn default_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("Cline Code", ".clinerules", ToolKind::Dir),
        ToolSpec::new("Claude Code", "CLAUDE.md", ToolKind::File),
        ToolSpec::new("Codex", "AGENTS.md", ToolKind::File),
        ToolSpec::new("Qwen Code", "QWEN.md", ToolKind::File),
        ToolSpec::new("Roo Code", ".roo/rules", ToolKind::Dir),
        ToolSpec::new("VSCode", ".instructions.md", ToolKind::File),
    ]
}
