//! Method to ontology-concept matching
//!
//! Ontology concepts and source methods are reduced to stemmed term trees,
//! then scored against each other by one of several matchers. Most callers
//! only need [`Analyzer`] and a [`Persistence`] implementation.

pub mod types;

pub use types::*;
