//! Command dispatch.

use std::sync::Arc;

use crate::bridge::Context;
use crate::handlers::{export, matching, stems};
use crate::{Command, Output, Result};

/// Runs [`Command`]s against a shared [`Context`].
///
/// The executor is cheap to clone; clones share the context.
#[derive(Clone)]
pub struct Executor {
    ctx: Arc<Context>,
}

impl Executor {
    /// Create an executor over `ctx`
    pub fn new(ctx: Context) -> Self {
        Executor { ctx: Arc::new(ctx) }
    }

    /// Shared context
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Execute one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        tracing::debug!(target: "conceptmatch::executor", command = name, "Executing");

        let result = match cmd {
            Command::RebuildConceptStems { project } => {
                stems::rebuild_concept_stems(&self.ctx, project)
            }
            Command::RebuildMethodStems { project } => {
                stems::rebuild_method_stems(&self.ctx, project)
            }
            Command::RebuildStemTrees { project } => stems::rebuild_stem_trees(&self.ctx, project),
            Command::ComputeMatches {
                project,
                matcher,
                threshold,
            } => matching::compute_matches(&self.ctx, project, matcher, threshold),
            Command::ExportMatches {
                project,
                matcher,
                threshold,
                path,
            } => export::export_matches(&self.ctx, project, matcher, threshold, path),
            Command::ListMatchers => matching::list_matchers(),
        };

        if let Err(ref err) = result {
            tracing::warn!(
                target: "conceptmatch::executor",
                command = name,
                error = %err,
                "Command failed"
            );
        }
        result
    }
}
