//! Tier 2: Matcher properties across the whole pipeline
//!
//! Every matcher runs through the analyzer on the shared snapshot.

use std::sync::Arc;

use conceptmatch::{
    Analyzer, Concept, ConceptId, MatcherKind, MemoryPersistence, MethodId, ProjectSnapshot,
    SourceMethod, StructuralVariant,
};
use proptest::prelude::*;

use crate::test_utils::*;

// ============================================================================
// Contract shared by all matchers
// ============================================================================

/// Test: weights are in (0, 1] for every matcher
#[test]
fn test_weights_in_unit_interval() {
    let analyzer = analyzer();
    for kind in MatcherKind::ALL {
        let map = analyzer.compute_matches(PROJECT, kind, Some(0.0)).unwrap();
        for m in map.values().flatten() {
            assert!(
                m.weight > 0.0 && m.weight <= 1.0 + 1e-12,
                "{} produced {}",
                kind,
                m.weight
            );
        }
    }
}

/// Test: matches are grouped under the method they belong to
#[test]
fn test_grouping_by_method() {
    let analyzer = analyzer();
    for kind in MatcherKind::ALL {
        let map = analyzer.compute_matches(PROJECT, kind, Some(0.0)).unwrap();
        for (method, matches) in &map {
            assert!(!matches.is_empty());
            assert!(matches.iter().all(|m| m.method == *method));
        }
    }
}

/// Test: two runs over the same trees give the same map
#[test]
fn test_runs_are_deterministic() {
    let analyzer = analyzer();
    for kind in MatcherKind::ALL {
        let first = analyzer.compute_matches(PROJECT, kind, Some(0.0)).unwrap();
        let second = analyzer.compute_matches(PROJECT, kind, Some(0.0)).unwrap();
        assert_eq!(first, second, "{} is not deterministic", kind);
    }
}

// ============================================================================
// Per-matcher expectations
// ============================================================================

/// Test: overlap evidence points at the shared "voltag" stems
#[test]
fn test_overlap_evidence() {
    let analyzer = analyzer();
    let map = analyzer
        .compute_matches(PROJECT, MatcherKind::Overlap, Some(0.0))
        .unwrap();
    let battery = map[&MethodId(10)]
        .iter()
        .find(|m| m.concept == ConceptId(1))
        .unwrap();
    assert!(!battery.method_stems.is_empty());
    assert!(!battery.concept_stems.is_empty());
}

/// Test: a higher threshold only removes matches
#[test]
fn test_threshold_is_monotone() {
    let analyzer = analyzer();
    for kind in [
        MatcherKind::Overlap,
        MatcherKind::Structural(StructuralVariant::Source),
        MatcherKind::Tfidf,
    ] {
        let low: usize = analyzer
            .compute_matches(PROJECT, kind, Some(0.0))
            .unwrap()
            .values()
            .map(Vec::len)
            .sum();
        let high = analyzer.compute_matches(PROJECT, kind, Some(0.5)).unwrap();
        let high_count: usize = high.values().map(Vec::len).sum();
        assert!(high_count <= low, "{}", kind);
        assert!(high.values().flatten().all(|m| m.weight >= 0.5), "{}", kind);
    }
}

/// Test: the structure variant's best match is exactly 1
#[test]
fn test_structure_maximum_is_one() {
    let analyzer = analyzer();
    let map = analyzer
        .compute_matches(
            PROJECT,
            MatcherKind::Structural(StructuralVariant::Structure),
            None,
        )
        .unwrap();
    let max = map.values().flatten().map(|m| m.weight).fold(0.0, f64::max);
    assert!(!map.is_empty());
    assert_eq!(max, 1.0);
}

/// Test: edit distance records no evidence
#[test]
fn test_edit_distance_without_evidence() {
    let analyzer = analyzer();
    let map = analyzer
        .compute_matches(PROJECT, MatcherKind::EditDistance, None)
        .unwrap();
    assert!(!map.is_empty());
    assert!(map
        .values()
        .flatten()
        .all(|m| m.method_stems.is_empty() && m.concept_stems.is_empty()));
}

// ============================================================================
// Generated projects
// ============================================================================

fn generated_analyzer(concepts: &[String], methods: &[String]) -> Analyzer {
    let store = MemoryPersistence::new();
    store.insert_project(
        PROJECT,
        ProjectSnapshot {
            concepts: concepts
                .iter()
                .enumerate()
                .map(|(i, name)| Concept::new(i as u64 + 1, name.as_str()))
                .collect(),
            methods: methods
                .iter()
                .enumerate()
                .map(|(i, name)| SourceMethod::new(i as u64 + 100, "Generated", name.as_str()))
                .collect(),
        },
    );
    let analyzer = Analyzer::new(Arc::new(store));
    analyzer.rebuild_stem_trees(PROJECT).unwrap();
    analyzer
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test: on any generated project every matcher stays in (0, 1] and
    /// only refers to methods and concepts of that project. Structure
    /// weights peak at exactly 1
    #[test]
    fn prop_generated_projects_respect_match_contract(
        concepts in prop::collection::vec(
            "(Battery|Pack|Voltage|Motor|Speed|Total)(Battery|Pack|Voltage|Motor|Speed|Total)?",
            1..4,
        ),
        methods in prop::collection::vec(
            "(get|set|compute)(Battery|Pack|Voltage|Motor|Speed|Total){1,2}",
            1..4,
        ),
    ) {
        let analyzer = generated_analyzer(&concepts, &methods);
        for kind in MatcherKind::ALL {
            let map = analyzer.compute_matches(PROJECT, kind, Some(0.0)).unwrap();
            for (method, matches) in &map {
                prop_assert!((100..100 + methods.len() as u64).contains(&method.0));
                for m in matches {
                    prop_assert_eq!(m.method, *method);
                    prop_assert!((1..=concepts.len() as u64).contains(&m.concept.0));
                    prop_assert!(
                        m.weight > 0.0 && m.weight <= 1.0 + 1e-12,
                        "{} produced {}",
                        kind,
                        m.weight
                    );
                }
            }
            if kind == MatcherKind::Structural(StructuralVariant::Structure) && !map.is_empty() {
                let max = map.values().flatten().map(|m| m.weight).fold(0.0, f64::max);
                prop_assert_eq!(max, 1.0);
            }
        }
    }
}
