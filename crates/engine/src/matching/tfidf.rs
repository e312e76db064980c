//! Plain TF-IDF matcher
//!
//! Every concept stem counts once. `idf(t) = max(0, ln(N / (1 + df(t))))`
//! with `N` the number of concepts.
//!
//! The clamp matters once a term occurs in most concepts: `N / (1 + df)`
//! drops below 1 and the raw logarithm turns negative. Negative cells would
//! let cosine go below 0, so such terms get weight 0 and every vector stays
//! element-wise non-negative.
//!
//! Scoring keeps one accumulator per method. It starts as the method's term
//! vector and is multiplied element-wise by every concept vector it is scored
//! against, so later concepts only see the terms all earlier ones shared.

use conceptmatch_core::{group_by_method, MatchMap, MethodConceptMatch};

use super::vector_space::VectorSpace;
use super::MatchContext;
use crate::primitives::{AlgebraResult, DenseVector};

/// Score one concept against the running accumulator.
///
/// Returns `None` (and leaves `acc` untouched) when either vector is null;
/// otherwise folds the concept into `acc` and returns `cosine(acc, concept)`.
pub fn score_against_concept(acc: &mut DenseVector, concept: &DenseVector) -> Option<f64> {
    if acc.is_null_vector() || concept.is_null_vector() {
        return None;
    }
    acc.ebe_multiply_assign(concept);
    Some(acc.cosine(concept))
}

/// Inverse document frequency of every vocabulary term
fn inverse_document_frequencies(space: &VectorSpace) -> DenseVector {
    let concepts = space.concepts.len() as f64;
    DenseVector::from_vec(
        (0..space.vocabulary.len())
            .map(|i| {
                let df = space.document_frequency(i) as f64;
                (concepts / (1.0 + df)).ln().max(0.0)
            })
            .collect(),
    )
}

/// Run the plain TF-IDF matcher, keeping pairs with a cosine above `threshold`.
pub fn compute(ctx: &MatchContext<'_>, threshold: f64) -> AlgebraResult<MatchMap> {
    let space = VectorSpace::build(ctx, |_, _| 1.0);
    let idf = inverse_document_frequencies(&space);
    let tfidf = space.tfidf(&idf)?;

    let mut matches = Vec::new();
    for (mcol, method) in space.methods.iter().enumerate() {
        let mut acc = space.method_terms.column_vector(mcol);

        for (ccol, concept) in space.concepts.iter().enumerate() {
            let concept_vector = tfidf.column_vector(ccol);
            let Some(similarity) = score_against_concept(&mut acc, &concept_vector) else {
                continue;
            };
            if similarity > threshold {
                let (method_stems, concept_stems) = space.evidence(&acc, mcol, ccol);
                let mut m = MethodConceptMatch::new(*method, *concept, similarity);
                m.method_stems = method_stems;
                m.concept_stems = concept_stems;
                matches.push(m);
            }
        }
    }

    Ok(group_by_method(matches))
}
