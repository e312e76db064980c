//! Core types for concept matching
//!
//! This crate defines the shared vocabulary of the workspace:
//! - identifier newtypes for projects, concepts, methods and stem nodes
//! - the concept and source-method graphs the matchers read
//! - stem type tags for both sides of a match
//! - match records, matcher selection and grouping
//! - reject lists and run configuration

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ids;
pub mod matcher;
pub mod model;
pub mod reject;
pub mod stem_type;

pub use config::{MatchConfig, RejectListPaths, ThresholdDefaults};
pub use error::{ConfigError, ConfigResult};
pub use ids::{ClassId, ConceptId, MethodId, ProjectId, StemId};
pub use matcher::{
    group_by_method, MatchMap, MatcherInfo, MatcherKind, MethodConceptMatch, StructuralVariant,
    UnknownMatcher,
};
pub use model::{
    Concept, ConceptAttribute, ConceptClass, ConceptLink, ReferenceOrigin, SourceMethod,
    SourceParameter, SourceReference,
};
pub use reject::{RejectList, RejectLists};
pub use stem_type::{ConceptStemType, MethodStemType};
