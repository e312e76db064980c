//! Method to concept matchers
//!
//! Every matcher reads the same [`MatchContext`] and returns a
//! [`MatchMap`]. Methods are visited in project order and, for each method,
//! concepts in project order, so a run over the same snapshot always yields
//! the same map.
//!
//! - `overlap`: shared-term ratio over both flattened trees
//! - `edit_distance`: mean normalized Levenshtein similarity of all term pairs
//! - `structural`: stem-type weight tables (source and structure variants)
//! - `tfidf` / `weighted_tfidf`: cosine in a term × concept vector space

pub mod edit_distance;
pub mod overlap;
pub mod structural;
pub mod tfidf;
pub mod weighted_tfidf;

mod vector_space;

use rustc_hash::FxHashMap;

use conceptmatch_core::{Concept, ConceptId, MatchMap, MatcherKind, SourceMethod, StemId};

use crate::primitives::AlgebraResult;
use crate::stems::{ConceptStemForest, MethodStemForest};

/// Read-only inputs of a matcher run
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    concepts: &'a [Concept],
    methods: &'a [SourceMethod],
    concept_stems: &'a ConceptStemForest,
    method_stems: &'a MethodStemForest,
}

impl<'a> MatchContext<'a> {
    /// Bundle a project snapshot with the forests built from it
    pub fn new(
        concepts: &'a [Concept],
        methods: &'a [SourceMethod],
        concept_stems: &'a ConceptStemForest,
        method_stems: &'a MethodStemForest,
    ) -> Self {
        MatchContext {
            concepts,
            methods,
            concept_stems,
            method_stems,
        }
    }

    /// Concepts in project order
    pub fn concepts(&self) -> &'a [Concept] {
        self.concepts
    }

    /// Methods in project order
    pub fn methods(&self) -> &'a [SourceMethod] {
        self.methods
    }

    /// Concept stem forest
    pub fn concept_stems(&self) -> &'a ConceptStemForest {
        self.concept_stems
    }

    /// Method stem forest
    pub fn method_stems(&self) -> &'a MethodStemForest {
        self.method_stems
    }

    /// `max(1, attribute count)` per concept
    pub(crate) fn attribute_divisors(&self) -> FxHashMap<ConceptId, usize> {
        self.concepts
            .iter()
            .map(|c| (c.id, c.attribute_divisor()))
            .collect()
    }

    /// Flattened tree of every concept that has one, in project order
    pub(crate) fn flattened_concepts(&self) -> Vec<(&'a Concept, Vec<StemId>)> {
        self.concepts
            .iter()
            .filter_map(|c| {
                self.concept_stems
                    .root_of(c.id)
                    .map(|root| (c, self.concept_stems.inflate(root)))
            })
            .collect()
    }

    /// Flattened tree of every method that has one, in project order
    pub(crate) fn flattened_methods(&self) -> Vec<(&'a SourceMethod, Vec<StemId>)> {
        self.methods
            .iter()
            .filter_map(|m| {
                self.method_stems
                    .root_of(m.id)
                    .map(|root| (m, self.method_stems.inflate(root)))
            })
            .collect()
    }
}

/// Run the matcher selected by `kind`.
///
/// `threshold` is only read by the kinds that report
/// [`MatcherKind::requires_threshold`].
pub fn compute_matches(
    kind: MatcherKind,
    ctx: &MatchContext<'_>,
    threshold: f64,
) -> AlgebraResult<MatchMap> {
    let map = match kind {
        MatcherKind::Overlap => overlap::compute(ctx, threshold),
        MatcherKind::EditDistance => edit_distance::compute(ctx),
        MatcherKind::Structural(variant) => structural::compute(ctx, variant, threshold),
        MatcherKind::Tfidf => tfidf::compute(ctx, threshold)?,
        MatcherKind::WeightedTfidf => weighted_tfidf::compute(ctx)?,
    };

    tracing::info!(
        target: "conceptmatch::matcher",
        matcher = kind.name(),
        methods = map.len(),
        matches = map.values().map(Vec::len).sum::<usize>(),
        "Matcher run complete"
    );
    Ok(map)
}
