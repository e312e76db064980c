//! Typed facade over the [`Executor`].
//!
//! Every method builds a [`Command`], executes it and unwraps the expected
//! [`Output`] variant.

use std::path::Path;
use std::sync::Arc;

use conceptmatch_core::{MatchConfig, MatchMap, MatcherInfo, MatcherKind, ProjectId};

use crate::bridge::Context;
use crate::output::{ExportSummary, StemCounts};
use crate::persistence::Persistence;
use crate::{Command, Error, Executor, Output, Result};

/// Entry point for embedding the matcher
#[derive(Clone)]
pub struct Analyzer {
    executor: Executor,
}

impl Analyzer {
    /// Analyzer with no reject lists and no default thresholds
    pub fn new(persistence: Arc<dyn Persistence>) -> Self {
        Analyzer {
            executor: Executor::new(Context::new(persistence)),
        }
    }

    /// Analyzer configured from `config`; reject-list files are read now
    pub fn with_config(persistence: Arc<dyn Persistence>, config: MatchConfig) -> Result<Self> {
        Ok(Analyzer {
            executor: Executor::new(Context::with_config(persistence, config)?),
        })
    }

    /// Underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // =========================================================================
    // Stem trees (3)
    // =========================================================================

    /// Rebuild both stem forests of a project.
    pub fn rebuild_stem_trees(&self, project: ProjectId) -> Result<(StemCounts, StemCounts)> {
        match self.executor.execute(Command::RebuildStemTrees { project })? {
            Output::StemTrees { concepts, methods } => Ok((concepts, methods)),
            _ => Err(Error::Internal {
                reason: "Unexpected output for RebuildStemTrees".into(),
            }),
        }
    }

    /// Rebuild the concept stem forest of a project.
    pub fn rebuild_concept_stems(&self, project: ProjectId) -> Result<StemCounts> {
        match self.executor.execute(Command::RebuildConceptStems { project })? {
            Output::StemCounts(counts) => Ok(counts),
            _ => Err(Error::Internal {
                reason: "Unexpected output for RebuildConceptStems".into(),
            }),
        }
    }

    /// Rebuild the method stem forest of a project.
    pub fn rebuild_method_stems(&self, project: ProjectId) -> Result<StemCounts> {
        match self.executor.execute(Command::RebuildMethodStems { project })? {
            Output::StemCounts(counts) => Ok(counts),
            _ => Err(Error::Internal {
                reason: "Unexpected output for RebuildMethodStems".into(),
            }),
        }
    }

    // =========================================================================
    // Matching (3)
    // =========================================================================

    /// Score every method of a project against every concept.
    ///
    /// `threshold` falls back to the configured default for `matcher`.
    pub fn compute_matches(
        &self,
        project: ProjectId,
        matcher: MatcherKind,
        threshold: Option<f64>,
    ) -> Result<MatchMap> {
        match self.executor.execute(Command::ComputeMatches {
            project,
            matcher,
            threshold,
        })? {
            Output::Matches(map) => Ok(map),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ComputeMatches".into(),
            }),
        }
    }

    /// Compute matches and write them to `path` as CSV.
    pub fn export_matches(
        &self,
        project: ProjectId,
        matcher: MatcherKind,
        threshold: Option<f64>,
        path: impl AsRef<Path>,
    ) -> Result<ExportSummary> {
        match self.executor.execute(Command::ExportMatches {
            project,
            matcher,
            threshold,
            path: path.as_ref().to_path_buf(),
        })? {
            Output::Exported(summary) => Ok(summary),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ExportMatches".into(),
            }),
        }
    }

    /// Describe every available matcher.
    pub fn matchers(&self) -> Result<Vec<MatcherInfo>> {
        match self.executor.execute(Command::ListMatchers)? {
            Output::Matchers(list) => Ok(list),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListMatchers".into(),
            }),
        }
    }
}
