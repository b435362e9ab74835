//! Batch orchestration
//!
//! Runs the per-tool dispatcher for every configured tool and aggregates the
//! outcome. The total source size is measured once up front; tools are then
//! processed concurrently, relying on the configuration invariant that their
//! destinations are pairwise disjoint.

use std::path::Path;

use serde::Serialize;
use tokio::task::JoinSet;
use tracing::info;

use crate::tool::ToolSpec;
use crate::{Result, dispatch, size};

/// Aggregate outcome of one full distribution run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Number of tools whose file count was greater than zero
    pub successful_tools: usize,
    /// Total byte size of markdown files directly under the source
    pub total_bytes: u64,
}

/// Distribute rules from `source` to every tool in `tools`.
///
/// A tool counts as successful iff it processed at least one file; an
/// absent source or an empty rule set is not an orchestrator failure.
/// Any unhandled I/O error from a tool fails the whole run.
pub async fn process_all(source: &Path, tools: &[ToolSpec]) -> Result<BatchSummary> {
    let total_bytes = size::total_markdown_bytes(source).await?;
    info!(total_bytes, "total rules size");

    let mut tasks: JoinSet<Result<u64>> = JoinSet::new();
    for tool in tools {
        let tool = tool.clone();
        let source = source.to_path_buf();
        tasks.spawn(async move { dispatch::process_tool(&source, &tool).await });
    }

    let mut successful_tools = 0;
    while let Some(joined) = tasks.join_next().await {
        if joined?? > 0 {
            successful_tools += 1;
        }
    }

    info!(successful_tools, total_bytes, "rules preparation completed");

    Ok(BatchSummary {
        successful_tools,
        total_bytes,
    })
}
