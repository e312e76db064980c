//! Rule-weighted structural matchers
//!
//! Both variants compare stems with equal terms and look the pair of stem
//! types up in a weight table:
//!
//! - [`StructuralVariant::Source`]: each concept stem contributes at most once
//!   per pair, the sum is clamped to 1 and kept when above the threshold.
//! - [`StructuralVariant::Structure`]: every matching stem pair contributes;
//!   weights are divided by the run maximum and kept when above 0.001.

use rustc_hash::{FxHashMap, FxHashSet};

use conceptmatch_core::{
    group_by_method, ConceptStemType, MatchMap, MethodConceptMatch, MethodStemType, StemId,
    StructuralVariant,
};

use super::MatchContext;
use crate::stems::ConceptStemForest;

/// Normalized weights at or below this are dropped by the structure variant
pub const STRUCTURE_CUTOFF: f64 = 0.001;

/// Counts a weight rule may divide by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divisors {
    /// `max(1, attributes)` of the concept
    pub attributes: usize,
    /// `max(1, parts)` of the concept stem's parent full stem
    pub parts: usize,
}

/// Source table weight for one stem pair; 0 when no rule applies.
pub fn source_weight(method: MethodStemType, concept: ConceptStemType, d: Divisors) -> f64 {
    use ConceptStemType as C;
    use MethodStemType as M;

    let attrs = d.attributes as f64;
    let parts = d.parts as f64;

    match method {
        M::ParameterTypeFull | M::ReferenceTypeFull => match concept {
            C::ClassNameFull => 1.0,
            _ => 0.0,
        },
        M::MethodNameFull | M::ParameterNameFull | M::ReferenceNameFull => match concept {
            C::ConceptNameFull => 0.9,
            C::AttributeIdentifierFull | C::AttributeNameFull => 0.9 / attrs,
            _ => 0.0,
        },
        M::MethodNamePart | M::ParameterNamePart | M::ReferenceNamePart => match concept {
            C::ConceptNameFull => 0.8,
            C::AttributeNameFull => 0.8 / attrs,
            C::ConceptNamePart => 0.8 / parts,
            C::AttributeNamePart => 0.8 / attrs / parts,
            _ => 0.0,
        },
    }
}

/// Structure table weight for one stem pair; 0 when no rule applies.
pub fn structure_weight(method: MethodStemType, concept: ConceptStemType, d: Divisors) -> f64 {
    use ConceptStemType as C;
    use MethodStemType as M;

    let attrs = d.attributes as f64;
    let parts = d.parts as f64;

    match method {
        M::ParameterTypeFull | M::ReferenceTypeFull => match concept {
            C::ClassNameFull => 1.0,
            _ => 0.0,
        },
        M::ParameterNameFull | M::ReferenceNameFull => match concept {
            C::ConceptNameFull | C::ClassIdentifierFull => 1.0,
            C::AttributeIdentifierFull | C::AttributeNameFull => 1.0 / attrs,
            _ => 0.0,
        },
        M::MethodNamePart => match concept {
            C::ConceptNamePart => 1.0 / parts,
            _ => 0.0,
        },
        M::ParameterNamePart | M::ReferenceNamePart => match concept {
            C::ConceptNamePart | C::ClassIdentifierPart => 1.0 / parts,
            C::AttributeIdentifierPart | C::AttributeNamePart => 1.0 / attrs / parts,
            _ => 0.0,
        },
        M::MethodNameFull => 0.0,
    }
}

/// Run a structural matcher.
///
/// `threshold` is only read by the source variant.
pub fn compute(ctx: &MatchContext<'_>, variant: StructuralVariant, threshold: f64) -> MatchMap {
    let concepts = ctx.flattened_concepts();
    let divisors = ctx.attribute_divisors();
    let concept_forest = ctx.concept_stems();
    let method_forest = ctx.method_stems();
    let mut matches = Vec::new();

    for (method, method_ids) in ctx.flattened_methods() {
        for (concept, concept_ids) in &concepts {
            let by_term = group_by_term(concept_forest, concept_ids);
            let attributes = divisors.get(&concept.id).copied().unwrap_or(1);

            let mut weight = 0.0;
            let mut used: FxHashSet<StemId> = FxHashSet::default();
            let mut m = MethodConceptMatch::new(method.id, concept.id, 0.0);

            for method_id in &method_ids {
                let method_stem = method_forest.node(*method_id);
                let Some(candidates) = by_term.get(method_stem.term.as_str()) else {
                    continue;
                };

                for concept_id in candidates {
                    let concept_stem = concept_forest.node(*concept_id);
                    let d = Divisors {
                        attributes,
                        parts: parent_part_count(concept_forest, *concept_id),
                    };
                    let contribution = match variant {
                        StructuralVariant::Source => {
                            source_weight(method_stem.stem_type, concept_stem.stem_type, d)
                        }
                        StructuralVariant::Structure => {
                            structure_weight(method_stem.stem_type, concept_stem.stem_type, d)
                        }
                    };
                    if contribution <= 0.0 {
                        continue;
                    }
                    if variant == StructuralVariant::Source && !used.insert(*concept_id) {
                        continue;
                    }

                    tracing::debug!(
                        target: "conceptmatch::matcher",
                        method_stem = %method_stem.stem_type,
                        concept_stem = %concept_stem.stem_type,
                        term = %method_stem.term,
                        contribution,
                        "Structural contribution"
                    );
                    weight += contribution;
                    m.method_stems.push(*method_id);
                    m.concept_stems.push(*concept_id);
                }
            }

            m.weight = match variant {
                StructuralVariant::Source => weight.min(1.0),
                StructuralVariant::Structure => weight,
            };
            let keep = match variant {
                StructuralVariant::Source => m.weight > threshold,
                StructuralVariant::Structure => m.weight > 0.0,
            };
            if keep {
                matches.push(m);
            }
        }
    }

    if variant == StructuralVariant::Structure {
        matches = normalize_by_max(matches);
    }
    group_by_method(matches)
}

/// Divide every weight by the largest one and drop those at or below
/// [`STRUCTURE_CUTOFF`].
fn normalize_by_max(mut matches: Vec<MethodConceptMatch>) -> Vec<MethodConceptMatch> {
    let max = matches.iter().map(|m| m.weight).fold(0.0, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }
    for m in &mut matches {
        m.weight /= max;
    }
    matches.retain(|m| m.weight > STRUCTURE_CUTOFF);
    matches
}

/// Concept stems of one tree grouped by term, in inflate order
fn group_by_term<'f>(
    forest: &'f ConceptStemForest,
    ids: &[StemId],
) -> FxHashMap<&'f str, Vec<StemId>> {
    let mut map: FxHashMap<&str, Vec<StemId>> = FxHashMap::default();
    for id in ids {
        map.entry(forest.term(*id)).or_default().push(*id);
    }
    map
}

/// `max(1, parts of the parent)`; 1 for roots
fn parent_part_count(forest: &ConceptStemForest, id: StemId) -> usize {
    forest
        .node(id)
        .parent
        .map(|parent| forest.node(parent).parts.len().max(1))
        .unwrap_or(1)
}
