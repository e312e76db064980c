//! Matching Comprehensive Test Suite
//!
//! Drives the public API end to end, from a JSON project snapshot to CSV.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Stem tree invariants
//! - **Tier 2**: Matcher properties across the whole pipeline
//! - **Tier 3**: Analyzer facade, configuration and export
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test matching_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Stem Tree Invariants
mod tier1_stem_trees;

// Tier 2: Matcher Properties
mod tier2_matchers;

// Tier 3: Facade and Configuration
mod tier3_analyzer;
