//! Stem forest rebuild handlers.
//!
//! Every rebuild reads and builds first, then stores. A combined rebuild
//! builds both forests before replacing either, so a failed read leaves the
//! stored forests as they were.

use std::sync::Arc;

use conceptmatch_core::ProjectId;
use conceptmatch_engine::{
    build_concept_forest, build_method_forest, ConceptStemForest, MethodStemForest, StemForest,
    StemNode,
};

use crate::bridge::Context;
use crate::output::StemCounts;
use crate::{Output, Result};

/// Handle RebuildConceptStems command.
pub fn rebuild_concept_stems(p: &Arc<Context>, project: ProjectId) -> Result<Output> {
    let forest = build_concepts(p, project)?;
    Ok(Output::StemCounts(store_concepts(p, project, forest)?))
}

/// Handle RebuildMethodStems command.
pub fn rebuild_method_stems(p: &Arc<Context>, project: ProjectId) -> Result<Output> {
    let forest = build_methods(p, project)?;
    Ok(Output::StemCounts(store_methods(p, project, forest)?))
}

/// Handle RebuildStemTrees command.
pub fn rebuild_stem_trees(p: &Arc<Context>, project: ProjectId) -> Result<Output> {
    let concept_forest = build_concepts(p, project)?;
    let method_forest = build_methods(p, project)?;

    let concepts = store_concepts(p, project, concept_forest)?;
    let methods = store_methods(p, project, method_forest)?;
    Ok(Output::StemTrees { concepts, methods })
}

fn build_concepts(p: &Arc<Context>, project: ProjectId) -> Result<ConceptStemForest> {
    let concepts = p.persistence.list_concepts(project)?;
    Ok(build_concept_forest(&concepts, &p.rejects))
}

fn build_methods(p: &Arc<Context>, project: ProjectId) -> Result<MethodStemForest> {
    let methods = p.persistence.list_source_methods(project)?;
    Ok(build_method_forest(&methods, &p.rejects))
}

fn store_concepts(
    p: &Arc<Context>,
    project: ProjectId,
    forest: ConceptStemForest,
) -> Result<StemCounts> {
    let counts = counts(&forest);
    p.persistence.replace_concept_stems(project, forest)?;
    tracing::info!(
        target: "conceptmatch::executor",
        %project,
        trees = counts.trees,
        stems = counts.stems,
        "Replaced concept stem trees"
    );
    Ok(counts)
}

fn store_methods(
    p: &Arc<Context>,
    project: ProjectId,
    forest: MethodStemForest,
) -> Result<StemCounts> {
    let counts = counts(&forest);
    p.persistence.replace_method_stems(project, forest)?;
    tracing::info!(
        target: "conceptmatch::executor",
        %project,
        trees = counts.trees,
        stems = counts.stems,
        "Replaced method stem trees"
    );
    Ok(counts)
}

fn counts<N: StemNode>(forest: &StemForest<N>) -> StemCounts {
    StemCounts {
        trees: forest.roots().len(),
        stems: forest.len(),
    }
}
