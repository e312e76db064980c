//! Weighted TF-IDF matcher
//!
//! Concept stems count by type: names and class identifiers 1, attribute
//! names and identifiers `1 / attributes`, name parts `1 / parts`, attribute
//! name parts `1 / attributes / parts`, everything else 0.
//! `idf(t) = max(0, log10(V / (1 + df(t))))` with `V` the vocabulary size.

use conceptmatch_core::{group_by_method, ConceptStemType, MatchMap, MethodConceptMatch};

use super::vector_space::VectorSpace;
use super::MatchContext;
use crate::primitives::{AlgebraResult, DenseMatrix, DenseVector};

/// Occurrence weight of a concept stem type given its divisors
pub fn occurrence_weight(stem_type: ConceptStemType, attributes: usize, parts: usize) -> f64 {
    use ConceptStemType as C;

    let attrs = attributes.max(1) as f64;
    let parts = parts.max(1) as f64;
    match stem_type {
        C::ClassNameFull | C::ConceptNameFull | C::ClassIdentifierFull => 1.0,
        C::AttributeIdentifierFull | C::AttributeNameFull => 1.0 / attrs,
        C::ConceptNamePart => 1.0 / parts,
        C::AttributeNamePart => 1.0 / attrs / parts,
        _ => 0.0,
    }
}

/// IDF per term: `log10(max(1, V / (1 + df)))`
fn inverse_document_frequencies(space: &VectorSpace) -> DenseVector {
    let rows = space.vocabulary.len();
    let vocabulary = rows as f64;
    let mut ratios = DenseMatrix::zeros(rows, 1);
    for i in 0..rows {
        let df = space.document_frequency(i) as f64;
        ratios.set(i, 0, (vocabulary / (1.0 + df)).max(1.0));
    }
    ratios.log10().column_vector(0)
}

/// Run the weighted TF-IDF matcher, keeping every pair with a positive cosine.
pub fn compute(ctx: &MatchContext<'_>) -> AlgebraResult<MatchMap> {
    let forest = ctx.concept_stems();
    let divisors = ctx.attribute_divisors();

    let space = VectorSpace::build(ctx, |_, stem| {
        let attributes = divisors.get(&stem.concept).copied().unwrap_or(1);
        let parts = stem
            .parent
            .map(|parent| forest.node(parent).parts.len())
            .unwrap_or(1);
        occurrence_weight(stem.stem_type, attributes, parts)
    });
    let idf = inverse_document_frequencies(&space);
    let tfidf = space.tfidf(&idf)?;

    let mut matches = Vec::new();
    for (mcol, method) in space.methods.iter().enumerate() {
        let method_vector = space.method_terms.column_vector(mcol);
        if method_vector.is_null_vector() {
            continue;
        }

        for (ccol, concept) in space.concepts.iter().enumerate() {
            let concept_vector = tfidf.column_vector(ccol);
            if concept_vector.is_null_vector() {
                continue;
            }
            let similarity = method_vector.cosine(&concept_vector);
            if similarity > 0.0 {
                let (method_stems, concept_stems) = space.evidence(&method_vector, mcol, ccol);
                let mut m = MethodConceptMatch::new(*method, *concept, similarity);
                m.method_stems = method_stems;
                m.concept_stems = concept_stems;
                matches.push(m);
            }
        }
    }

    Ok(group_by_method(matches))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use conceptmatch_core::{ConceptId, MethodId};

    #[test]
    fn test_occurrence_weights() {
        use ConceptStemType as C;
        assert_eq!(occurrence_weight(C::ConceptNameFull, 3, 2), 1.0);
        assert_eq!(occurrence_weight(C::ClassIdentifierFull, 3, 2), 1.0);
        assert_eq!(occurrence_weight(C::AttributeNameFull, 4, 2), 0.25);
        assert_eq!(occurrence_weight(C::ConceptNamePart, 4, 2), 0.5);
        assert_eq!(occurrence_weight(C::AttributeNamePart, 2, 2), 0.25);
        assert_eq!(occurrence_weight(C::ClassNamePart, 1, 1), 0.0);
        assert_eq!(occurrence_weight(C::AttributeIdentifierPart, 1, 1), 0.0);
        assert_eq!(occurrence_weight(C::AttributeNameFull, 0, 0), 1.0);
    }

    #[test]
    fn test_matches_without_accumulation() {
        // unlike the plain matcher, concept order does not matter
        let project = Project::new(vec![motor(), battery_pack(), sensor()], vec![read_voltage()]);
        let map = compute(&project.ctx()).unwrap();

        let matches = &map[&MethodId(11)];
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].concept, ConceptId(1));
        assert!(matches[0].weight > 0.0 && matches[0].weight <= 1.0);
        assert!(!matches[0].concept_stems.is_empty());
    }

    #[test]
    fn test_idf_uses_vocabulary_size() {
        // vocabulary of 9 terms, each in one concept: log10(9 / 2)
        let project = Project::new(vec![battery_pack(), motor(), sensor()], Vec::new());
        let space = VectorSpace::build(&project.ctx(), |_, _| 1.0);
        assert_eq!(space.vocabulary.len(), 9);
        let idf = inverse_document_frequencies(&space);
        for x in idf.iter() {
            assert!((x - 4.5f64.log10()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_method_without_shared_terms_is_skipped() {
        let project = Project::new(
            vec![battery_pack()],
            vec![conceptmatch_core::SourceMethod::new(40, "Ui", "render")],
        );
        assert!(compute(&project.ctx()).unwrap().is_empty());
    }
}
