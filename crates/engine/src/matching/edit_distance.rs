//! Edit-distance matcher
//!
//! Scores a pair by the mean normalized Levenshtein similarity over every
//! (method stem, concept stem) term pair. No evidence is recorded.

use conceptmatch_core::{group_by_method, MatchMap, MethodConceptMatch};

use super::MatchContext;

/// Levenshtein distance over chars (Wagner–Fischer, unit costs).
///
/// ```
/// use conceptmatch_engine::matching::edit_distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rolling rows of the cost matrix
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// `1 - lev(a, b) / max(len a, len b)` on lowercased input, in `[0, 1]`.
///
/// Two empty strings are identical.
pub fn term_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

/// Run the edit-distance matcher, keeping every pair with a positive score.
pub fn compute(ctx: &MatchContext<'_>) -> MatchMap {
    let concepts = ctx.flattened_concepts();
    let mut matches = Vec::new();

    for (method, method_ids) in ctx.flattened_methods() {
        for (concept, concept_ids) in &concepts {
            let pairs = (method_ids.len() * concept_ids.len()) as f64;
            let mut weight = 0.0;
            for m in &method_ids {
                let method_term = ctx.method_stems().term(*m);
                for c in concept_ids {
                    weight += term_similarity(method_term, ctx.concept_stems().term(*c)) / pairs;
                }
            }

            tracing::debug!(
                target: "conceptmatch::matcher",
                method = %method.id,
                concept = %concept.id,
                weight,
                "Edit-distance score"
            );

            if weight > 0.0 {
                matches.push(MethodConceptMatch::new(method.id, concept.id, weight));
            }
        }
    }

    group_by_method(matches)
}
