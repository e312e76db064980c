//! Results returned by the [`Executor`](crate::Executor).

use std::path::PathBuf;

use conceptmatch_core::{MatchMap, MatcherInfo};
use serde::{Deserialize, Serialize};

/// Size of a freshly built stem forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCounts {
    /// Number of trees (one per owner with a non-empty root)
    pub trees: usize,
    /// Number of stem nodes across all trees
    pub stems: usize,
}

/// Outcome of a CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// File that was written
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
}

/// Command output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// One forest was rebuilt
    StemCounts(StemCounts),
    /// Both forests were rebuilt
    StemTrees {
        /// Concept side
        concepts: StemCounts,
        /// Method side
        methods: StemCounts,
    },
    /// Matches grouped by method
    Matches(MatchMap),
    /// Matches were written to disk
    Exported(ExportSummary),
    /// Available matchers
    Matchers(Vec<MatcherInfo>),
}
