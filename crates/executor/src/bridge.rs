//! Bridge between commands and the engine.
//!
//! [`Context`] holds everything a handler needs beyond its command
//! arguments. [`ProjectData`] is a loaded project ready for a matcher run.

use std::sync::Arc;

use conceptmatch_core::{
    Concept, MatchConfig, MatcherKind, ProjectId, RejectLists, SourceMethod,
};
use conceptmatch_engine::{ConceptStemForest, MatchContext, MethodStemForest};

use crate::convert::convert_result;
use crate::persistence::Persistence;
use crate::{Error, Result};

/// Shared state handed to every handler
pub struct Context {
    /// Project storage
    pub persistence: Arc<dyn Persistence>,
    /// Reject lists applied when building stem trees
    pub rejects: RejectLists,
    /// Run configuration
    pub config: MatchConfig,
}

impl Context {
    /// Context with no reject lists and no default thresholds
    pub fn new(persistence: Arc<dyn Persistence>) -> Self {
        Context {
            persistence,
            rejects: RejectLists::default(),
            config: MatchConfig::default(),
        }
    }

    /// Context configured from `config`.
    ///
    /// Reject-list files are read here, so a missing file fails before any
    /// command runs.
    pub fn with_config(persistence: Arc<dyn Persistence>, config: MatchConfig) -> Result<Self> {
        let rejects = convert_result(config.reject_lists.load())?;
        tracing::info!(
            target: "conceptmatch::config",
            concept_rejects = rejects.concepts.len(),
            method_rejects = rejects.methods.len(),
            type_rejects = rejects.types.len(),
            "Loaded reject lists"
        );
        Ok(Context {
            persistence,
            rejects,
            config,
        })
    }

    /// Threshold to use for a run of `kind`.
    ///
    /// An explicit value wins, then the configured default. Either must lie
    /// in [0, 1]. Kinds that need a threshold fail without one; the others
    /// get 0.
    pub fn resolve_threshold(&self, kind: MatcherKind, explicit: Option<f64>) -> Result<f64> {
        if let Some(value) = explicit.or_else(|| self.config.thresholds.for_kind(kind)) {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidThreshold {
                    matcher: kind.name().to_string(),
                    value,
                });
            }
            return Ok(value);
        }
        if kind.requires_threshold() {
            return Err(Error::ThresholdRequired {
                matcher: kind.name().to_string(),
            });
        }
        Ok(0.0)
    }
}

/// A project loaded for matching
pub struct ProjectData {
    /// Concepts in project order
    pub concepts: Vec<Concept>,
    /// Methods in project order
    pub methods: Vec<SourceMethod>,
    /// Concept forest the run reads
    pub concept_stems: Arc<ConceptStemForest>,
    /// Method forest the run reads
    pub method_stems: Arc<MethodStemForest>,
}

impl ProjectData {
    /// Load graphs and both forests.
    ///
    /// Fails with [`Error::StemTreesMissing`] if either forest was never
    /// built.
    pub fn load(p: &Context, project: ProjectId) -> Result<Self> {
        let concepts = p.persistence.list_concepts(project)?;
        let methods = p.persistence.list_source_methods(project)?;
        let concept_stems = p
            .persistence
            .concept_stems(project)?
            .ok_or(Error::StemTreesMissing { project })?;
        let method_stems = p
            .persistence
            .method_stems(project)?
            .ok_or(Error::StemTreesMissing { project })?;
        Ok(ProjectData {
            concepts,
            methods,
            concept_stems,
            method_stems,
        })
    }

    /// Borrow as a matcher context
    pub fn match_context(&self) -> MatchContext<'_> {
        MatchContext::new(
            &self.concepts,
            &self.methods,
            &self.concept_stems,
            &self.method_stems,
        )
    }
}
