//! Rule distribution engine
//!
//! This crate synchronizes a canonical directory of markdown "rule" documents
//! into per-tool destinations. Each configured tool receives the rules either
//! as a recursively copied directory tree or as a single bundled markdown
//! file, depending on its [`ToolKind`].
//!
//! # Architecture
//!
//! ```text
//!            batch (orchestrator)
//!                    |
//!            dispatch (per tool)
//!             /              \
//!        copier             bundler
//!             \              /
//!            io / size (primitives)
//! ```
//!
//! The engine is a one-shot setup utility: "known-absent" conditions (missing
//! source directory, no markdown files) are normalized into zero-count
//! results, while any real I/O failure propagates to the caller unmodified.

pub mod batch;
pub mod bundler;
pub mod config;
pub mod copier;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod size;
pub mod tool;

pub use batch::{BatchSummary, process_all};
pub use bundler::bundle;
pub use config::Manifest;
pub use copier::copy_tree;
pub use dispatch::process_tool;
pub use error::{Error, Result};
pub use size::total_markdown_bytes;
pub use tool::{ToolKind, ToolSpec, default_tools};
