//! Term × entity matrices shared by the TF-IDF matchers
//!
//! Rows follow the concept vocabulary (terms in first-seen order), concept
//! columns follow project order and method columns follow project order.

use rustc_hash::FxHashMap;

use conceptmatch_core::{ConceptId, MethodId, StemId};

use super::MatchContext;
use crate::primitives::{AlgebraResult, DenseMatrix, DenseVector, EvidenceMatrix};
use crate::stems::{ConceptStem, TermIndex};

pub(crate) struct VectorSpace {
    pub vocabulary: TermIndex,
    pub concepts: Vec<ConceptId>,
    pub methods: Vec<MethodId>,
    /// Weighted term occurrences per concept
    pub occurrences: DenseMatrix,
    pub concept_evidence: EvidenceMatrix,
    /// 1 where a method carries the term
    pub method_terms: DenseMatrix,
    pub method_evidence: EvidenceMatrix,
}

impl VectorSpace {
    /// Build the matrices; `weight` gives each concept stem's occurrence weight.
    pub fn build(ctx: &MatchContext<'_>, weight: impl Fn(StemId, &ConceptStem) -> f64) -> Self {
        let concept_forest = ctx.concept_stems();
        let method_forest = ctx.method_stems();

        let vocabulary = concept_forest.by_term();
        let concepts: Vec<ConceptId> = ctx.concepts().iter().map(|c| c.id).collect();
        let methods: Vec<MethodId> = ctx.methods().iter().map(|m| m.id).collect();
        let concept_col: FxHashMap<ConceptId, usize> =
            concepts.iter().enumerate().map(|(j, id)| (*id, j)).collect();
        let method_col: FxHashMap<MethodId, usize> =
            methods.iter().enumerate().map(|(j, id)| (*id, j)).collect();

        let rows = vocabulary.len();
        let mut occurrences = DenseMatrix::zeros(rows, concepts.len());
        let mut concept_evidence = EvidenceMatrix::new(rows, concepts.len());
        for i in 0..rows {
            for id in vocabulary.stems_at(i) {
                let stem = concept_forest.node(*id);
                let Some(j) = concept_col.get(&stem.concept).copied() else {
                    continue;
                };
                occurrences.add_at(i, j, weight(*id, stem));
                concept_evidence.push(i, j, *id);
            }
        }

        let mut method_terms = DenseMatrix::zeros(rows, methods.len());
        let mut method_evidence = EvidenceMatrix::new(rows, methods.len());
        let method_index = method_forest.by_term();
        for term in method_index.terms() {
            let Some(i) = vocabulary.position(term) else {
                continue;
            };
            for id in method_index.stems(term) {
                let stem = method_forest.node(*id);
                let Some(j) = method_col.get(&stem.method).copied() else {
                    continue;
                };
                method_terms.set(i, j, 1.0);
                method_evidence.push(i, j, *id);
            }
        }

        VectorSpace {
            vocabulary,
            concepts,
            methods,
            occurrences,
            concept_evidence,
            method_terms,
            method_evidence,
        }
    }

    /// Occurrences divided by each concept's total; 0 for empty concepts
    pub fn term_frequencies(&self) -> AlgebraResult<DenseMatrix> {
        let totals = DenseVector::from_vec(
            (0..self.concepts.len())
                .map(|j| self.occurrences.column(j).iter().sum())
                .collect(),
        );
        let mut tf = DenseMatrix::zeros(self.vocabulary.len(), self.concepts.len());
        for i in 0..self.vocabulary.len() {
            tf.set_row(i, &self.occurrences.row_vector(i).ebe_divide(&totals))?;
        }
        Ok(tf)
    }

    /// Number of concepts in which the term at `row` occurs
    pub fn document_frequency(&self, row: usize) -> usize {
        self.occurrences.row_vector(row).nonzero_count()
    }

    /// `tf ⊙ idf`, with one IDF value per term broadcast across concepts
    pub fn tfidf(&self, idf: &DenseVector) -> AlgebraResult<DenseMatrix> {
        let mut idf_matrix = DenseMatrix::zeros(self.vocabulary.len(), self.concepts.len());
        for j in 0..self.concepts.len() {
            idf_matrix.set_column(j, idf)?;
        }
        self.term_frequencies()?.ebe_multiply(&idf_matrix)
    }

    /// Evidence for every term where `active` is non-zero:
    /// (method stems, concept stems)
    pub fn evidence(
        &self,
        active: &DenseVector,
        method_col: usize,
        concept_col: usize,
    ) -> (Vec<StemId>, Vec<StemId>) {
        let mut method_stems = Vec::new();
        let mut concept_stems = Vec::new();
        for k in active.nonzero_indices() {
            method_stems.extend_from_slice(self.method_evidence.get(k, method_col));
            concept_stems.extend_from_slice(self.concept_evidence.get(k, concept_col));
        }
        (method_stems, concept_stems)
    }
}
