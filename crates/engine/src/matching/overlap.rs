//! Shared-term overlap matcher
//!
//! `similarity = matched / (|T_M| + |T_C|)` where `matched` counts the stems
//! on either side whose term occurs on both sides. A pair sharing no term is
//! never emitted.

use rustc_hash::FxHashSet;

use conceptmatch_core::{group_by_method, MatchMap, MethodConceptMatch, StemId};

use super::MatchContext;
use crate::stems::{StemForest, StemNode};

/// Overlap ratio of two term lists; symmetric in its arguments.
pub fn similarity<A: AsRef<str>, B: AsRef<str>>(method_terms: &[A], concept_terms: &[B]) -> f64 {
    let total = method_terms.len() + concept_terms.len();
    if total == 0 {
        return 0.0;
    }
    let shared = shared_terms(method_terms, concept_terms);
    let matched = count_shared(method_terms, &shared) + count_shared(concept_terms, &shared);
    matched as f64 / total as f64
}

/// Run the overlap matcher, keeping pairs with `0 < similarity >= threshold`.
pub fn compute(ctx: &MatchContext<'_>, threshold: f64) -> MatchMap {
    let concepts = ctx.flattened_concepts();
    let mut matches = Vec::new();

    for (method, method_ids) in ctx.flattened_methods() {
        let method_terms = terms(ctx.method_stems(), &method_ids);

        for (concept, concept_ids) in &concepts {
            let concept_terms = terms(ctx.concept_stems(), concept_ids);
            let weight = similarity(&method_terms, &concept_terms);
            if weight <= 0.0 || weight < threshold {
                continue;
            }

            let shared = shared_terms(&method_terms, &concept_terms);
            let mut m = MethodConceptMatch::new(method.id, concept.id, weight);
            m.method_stems = evidence(ctx.method_stems(), &method_ids, &shared);
            m.concept_stems = evidence(ctx.concept_stems(), concept_ids, &shared);
            matches.push(m);
        }
    }

    group_by_method(matches)
}

fn terms<'f, N: StemNode>(forest: &'f StemForest<N>, ids: &[StemId]) -> Vec<&'f str> {
    ids.iter().map(|id| forest.term(*id)).collect()
}

fn shared_terms<'a, A: AsRef<str>, B: AsRef<str>>(a: &'a [A], b: &[B]) -> FxHashSet<&'a str> {
    let other: FxHashSet<&str> = b.iter().map(|t| t.as_ref()).collect();
    a.iter()
        .map(|t| t.as_ref())
        .filter(|t| other.contains(t))
        .collect()
}

fn count_shared<S: AsRef<str>>(terms: &[S], shared: &FxHashSet<&str>) -> usize {
    terms.iter().filter(|t| shared.contains(t.as_ref())).count()
}

fn evidence<N: StemNode>(
    forest: &StemForest<N>,
    ids: &[StemId],
    shared: &FxHashSet<&str>,
) -> Vec<StemId> {
    ids.iter()
        .copied()
        .filter(|id| shared.contains(forest.term(*id)))
        .collect()
}
