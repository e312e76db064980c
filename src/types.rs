//! Public types for the conceptmatch API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Entry points
// ============================================================================

pub use conceptmatch_executor::{Analyzer, Command, Executor, Output};

// Storage seam
pub use conceptmatch_executor::{MemoryPersistence, Persistence, ProjectSnapshot};

// Command results
pub use conceptmatch_executor::{ExportSummary, StemCounts};

// CSV export
pub use conceptmatch_executor::{export_matches_csv, CSV_HEADER};

// ============================================================================
// Model
// ============================================================================

// Identifiers
pub use conceptmatch_core::{ClassId, ConceptId, MethodId, ProjectId, StemId};

// Source graphs
pub use conceptmatch_core::{
    Concept, ConceptAttribute, ConceptClass, ConceptLink, ReferenceOrigin, SourceMethod,
    SourceParameter, SourceReference,
};

// Stem types
pub use conceptmatch_core::{ConceptStemType, MethodStemType};

// Matchers and results
pub use conceptmatch_core::{
    MatchMap, MatcherInfo, MatcherKind, MethodConceptMatch, StructuralVariant,
};

// ============================================================================
// Configuration
// ============================================================================

pub use conceptmatch_core::{MatchConfig, RejectList, RejectListPaths, RejectLists, ThresholdDefaults};

// ============================================================================
// Engine (for callers driving matchers directly)
// ============================================================================

pub use conceptmatch_engine::{
    build_concept_forest, build_method_forest, compute_matches, ConceptStemForest, MatchContext,
    MethodStemForest, StemNode,
};

// ============================================================================
// Errors
// ============================================================================

pub use conceptmatch_core::ConfigError;
pub use conceptmatch_engine::AlgebraError;
pub use conceptmatch_executor::Error;

/// Result type for the public API
pub type Result<T> = std::result::Result<T, Error>;
