//! Stem extraction and matching engine
//!
//! Turns concept and method graphs into stem forests and scores every
//! method against every concept.
//!
//! # Modules
//!
//! - `search`: identifier canonicalization and stemming
//! - `stems`: stem tree arena and builders
//! - `primitives`: dense vectors, matrices and evidence matrices
//! - `matching`: the five matchers and their dispatch

pub mod matching;
pub mod primitives;
pub mod search;
pub mod stems;

pub use matching::{compute_matches, MatchContext};
pub use primitives::{AlgebraError, AlgebraResult, DenseMatrix, DenseVector, EvidenceMatrix};
pub use search::{canonicalize, get_stems, stem};
pub use stems::{
    build_concept_forest, build_method_forest, ConceptStem, ConceptStemForest, MethodStem,
    MethodStemForest, StemForest, StemNode, TermIndex,
};
