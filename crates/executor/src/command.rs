//! Commands accepted by the [`Executor`](crate::Executor).

use std::path::PathBuf;

use conceptmatch_core::{MatcherKind, ProjectId};
use serde::{Deserialize, Serialize};

/// A single unit of work against one project.
///
/// Commands are plain data so they can be queued, logged or sent over a
/// wire unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // =========================================================================
    // Stem trees (3)
    // =========================================================================
    /// Rebuild the concept stem forest of a project
    RebuildConceptStems {
        /// Target project
        project: ProjectId,
    },

    /// Rebuild the method stem forest of a project
    RebuildMethodStems {
        /// Target project
        project: ProjectId,
    },

    /// Rebuild both forests, concepts first
    RebuildStemTrees {
        /// Target project
        project: ProjectId,
    },

    // =========================================================================
    // Matching (3)
    // =========================================================================
    /// Score every method against every concept
    ComputeMatches {
        /// Target project
        project: ProjectId,
        /// Matcher to run
        matcher: MatcherKind,
        /// Explicit threshold; falls back to the configured default
        #[serde(default)]
        threshold: Option<f64>,
    },

    /// Compute matches and write them to a CSV file
    ExportMatches {
        /// Target project
        project: ProjectId,
        /// Matcher to run
        matcher: MatcherKind,
        /// Explicit threshold; falls back to the configured default
        #[serde(default)]
        threshold: Option<f64>,
        /// Destination file, overwritten if present
        path: PathBuf,
    },

    /// Describe every available matcher
    ListMatchers,
}

impl Command {
    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::RebuildConceptStems { .. } => "RebuildConceptStems",
            Command::RebuildMethodStems { .. } => "RebuildMethodStems",
            Command::RebuildStemTrees { .. } => "RebuildStemTrees",
            Command::ComputeMatches { .. } => "ComputeMatches",
            Command::ExportMatches { .. } => "ExportMatches",
            Command::ListMatchers => "ListMatchers",
        }
    }
}
