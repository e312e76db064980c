//! Tier 1: Stem tree invariants
//!
//! Properties every forest built from a snapshot must hold.

use conceptmatch::{
    build_concept_forest, build_method_forest, ConceptId, MethodId, ProjectSnapshot, StemNode,
};

use crate::test_utils::*;

fn snapshot() -> ProjectSnapshot {
    serde_json::from_str(SNAPSHOT).unwrap()
}

// ============================================================================
// Shape
// ============================================================================

/// Test: an entity whose name yields no stems gets no tree
#[test]
fn test_empty_concept_has_no_tree() {
    let s = snapshot();
    let forest = build_concept_forest(&s.concepts, &rejects());
    assert_eq!(forest.roots().len(), 3);
    assert!(forest.root_of(ConceptId(4)).is_none());
    assert!(forest.inflate_owner(ConceptId(4)).is_empty());
}

/// Test: a full node's term is the concatenation of its parts
#[test]
fn test_full_term_is_concatenation_of_parts() {
    let s = snapshot();
    let concepts = build_concept_forest(&s.concepts, &rejects());
    let methods = build_method_forest(&s.methods, &rejects());

    for (_, node) in concepts.iter() {
        if !node.parts().is_empty() {
            let joined: String = node.parts().iter().map(|p| concepts.term(*p)).collect();
            assert_eq!(node.term(), joined);
        }
    }
    for (_, node) in methods.iter() {
        if !node.parts().is_empty() {
            let joined: String = node.parts().iter().map(|p| methods.term(*p)).collect();
            assert_eq!(node.term(), joined);
        }
    }
}

/// Test: flattening starts at the root and stays inside one owner's tree
#[test]
fn test_inflate_stays_within_owner() {
    let s = snapshot();
    let forest = build_method_forest(&s.methods, &rejects());

    for method in &s.methods {
        let flat = forest.inflate_owner(method.id);
        assert_eq!(Some(flat[0]), forest.root_of(method.id));
        assert!(flat.iter().all(|id| forest.node(*id).owner() == method.id));
    }
}

/// Test: rejected words and types never become stems
#[test]
fn test_rejected_words_are_absent() {
    let s = snapshot();
    let forest = build_method_forest(&s.methods, &rejects());
    let index = forest.by_term();
    for word in ["get", "set", "comput", "doubl", "int", "void"] {
        assert!(index.stems(word).is_empty(), "{} should be rejected", word);
    }
    let root = forest.root_of(MethodId(12)).unwrap();
    assert_eq!(forest.term(root), "motorspeed");
}

// ============================================================================
// Determinism
// ============================================================================

/// Test: building twice gives identical forests
#[test]
fn test_rebuild_is_structurally_identical() {
    let s = snapshot();
    let first = build_concept_forest(&s.concepts, &rejects());
    let second = build_concept_forest(&s.concepts, &rejects());

    assert_eq!(first.roots(), second.roots());
    let a: Vec<_> = first.iter().map(|(id, n)| (id, n.clone())).collect();
    let b: Vec<_> = second.iter().map(|(id, n)| (id, n.clone())).collect();
    assert_eq!(a, b);
}
