//! Manifest loading
//!
//! An optional `rules.toml` at the project root can override the source
//! directory, the tool list, and the postinstall hook commands:
//!
//! ```toml
//! source = "rules"
//! postinstall = ["husky install"]
//!
//! [[tools]]
//! name = "Claude Code"
//! path = "CLAUDE.md"
//! kind = "file"
//! ```
//!
//! A missing manifest falls back to the built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::tool::{ToolSpec, default_tools};
use crate::{Error, Result};

/// Default source directory, relative to the project root
pub const DEFAULT_SOURCE: &str = "rules";

/// Default manifest file name
pub const MANIFEST_FILE: &str = "rules.toml";

/// Parsed `rules.toml` contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Source directory override
    #[serde(default)]
    pub source: Option<String>,
    /// Tool list override; `None` means use the built-in list
    #[serde(default)]
    pub tools: Option<Vec<ToolSpec>>,
    /// Shell commands to run before rule preparation in postinstall
    #[serde(default)]
    pub postinstall: Vec<String>,
}

impl Manifest {
    /// Load a manifest from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a manifest, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The effective source directory (relative to the project root).
    pub fn source_dir(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    /// The effective tool list.
    pub fn tools(&self) -> Vec<ToolSpec> {
        self.tools.clone().unwrap_or_else(default_tools)
    }
}
