//! Matcher selection and match records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ids::{ConceptId, MethodId, StemId};

/// Scored association between one method and one concept.
///
/// Evidence lists hold ids into the stem forests the run was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodConceptMatch {
    /// Matched method
    pub method: MethodId,
    /// Matched concept
    pub concept: ConceptId,
    /// Similarity weight
    pub weight: f64,
    /// Method stems that contributed
    pub method_stems: Vec<StemId>,
    /// Concept stems that contributed
    pub concept_stems: Vec<StemId>,
}

impl MethodConceptMatch {
    /// Create a match without evidence
    pub fn new(method: MethodId, concept: ConceptId, weight: f64) -> Self {
        MethodConceptMatch {
            method,
            concept,
            weight,
            method_stems: Vec::new(),
            concept_stems: Vec::new(),
        }
    }
}

/// Matches grouped by method, in discovery order within each method
pub type MatchMap = BTreeMap<MethodId, Vec<MethodConceptMatch>>;

/// Group a flat list of matches by method, keeping their relative order.
pub fn group_by_method(matches: Vec<MethodConceptMatch>) -> MatchMap {
    let mut map = MatchMap::new();
    for m in matches {
        map.entry(m.method).or_default().push(m);
    }
    map
}

/// The two rule-weighted structural scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralVariant {
    /// Stem-type weight table, summed and clamped to 1
    Source,
    /// Stem-type weight table, normalized by the run maximum
    Structure,
}

/// Matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// Dice-style term overlap
    Overlap,
    /// Average normalized Levenshtein similarity
    EditDistance,
    /// Rule-weighted comparison of stem types
    Structural(StructuralVariant),
    /// Cosine over TF-IDF term vectors
    Tfidf,
    /// Cosine over stem-type weighted TF-IDF term vectors
    WeightedTfidf,
}

impl MatcherKind {
    /// Every available matcher, in presentation order
    pub const ALL: [MatcherKind; 6] = [
        MatcherKind::Overlap,
        MatcherKind::EditDistance,
        MatcherKind::Structural(StructuralVariant::Source),
        MatcherKind::Structural(StructuralVariant::Structure),
        MatcherKind::Tfidf,
        MatcherKind::WeightedTfidf,
    ];

    /// Short stable name, also accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            MatcherKind::Overlap => "overlap",
            MatcherKind::EditDistance => "edit-distance",
            MatcherKind::Structural(StructuralVariant::Source) => "source",
            MatcherKind::Structural(StructuralVariant::Structure) => "structure",
            MatcherKind::Tfidf => "tfidf",
            MatcherKind::WeightedTfidf => "weighted-tfidf",
        }
    }

    /// Algorithm revision, bumped whenever scores change
    pub fn version(&self) -> &'static str {
        match self {
            MatcherKind::Overlap => "1.0.18",
            MatcherKind::EditDistance => "1.0.10",
            MatcherKind::Structural(StructuralVariant::Source) => "1.0.6",
            MatcherKind::Structural(StructuralVariant::Structure) => "1.0.1",
            MatcherKind::Tfidf => "1.0.7",
            MatcherKind::WeightedTfidf => "1.0.4",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            MatcherKind::Overlap => "method concept matcher based on shared stem overlap",
            MatcherKind::EditDistance => "method concept matcher based on levenshtein comparison",
            MatcherKind::Structural(StructuralVariant::Source) => {
                "method concept matcher based on method/concept stem type comparison"
            }
            MatcherKind::Structural(StructuralVariant::Structure) => {
                "structure method concept matcher normalized by the best match"
            }
            MatcherKind::Tfidf => "method concept matcher based on tfidf algorithm",
            MatcherKind::WeightedTfidf => {
                "method concept matcher based on stem-type weighted tfidf algorithm"
            }
        }
    }

    /// Whether the matcher filters on a caller-supplied threshold
    pub fn requires_threshold(&self) -> bool {
        matches!(
            self,
            MatcherKind::Overlap
                | MatcherKind::Structural(StructuralVariant::Source)
                | MatcherKind::Tfidf
        )
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown matcher name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown matcher '{0}'")]
pub struct UnknownMatcher(pub String);

impl FromStr for MatcherKind {
    type Err = UnknownMatcher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "overlap" | "jaccard" => Ok(MatcherKind::Overlap),
            "edit-distance" | "levenshtein" => Ok(MatcherKind::EditDistance),
            "source" => Ok(MatcherKind::Structural(StructuralVariant::Source)),
            "structure" => Ok(MatcherKind::Structural(StructuralVariant::Structure)),
            "tfidf" => Ok(MatcherKind::Tfidf),
            "weighted-tfidf" | "wtfidf" => Ok(MatcherKind::WeightedTfidf),
            _ => Err(UnknownMatcher(s.to_string())),
        }
    }
}

/// Name, version and description of a matcher, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherInfo {
    /// Matcher selector
    pub kind: MatcherKind,
    /// Stable name
    pub name: String,
    /// Algorithm revision
    pub version: String,
    /// One-line description
    pub description: String,
}

impl From<MatcherKind> for MatcherInfo {
    fn from(kind: MatcherKind) -> Self {
        MatcherInfo {
            kind,
            name: kind.name().to_string(),
            version: kind.version().to_string(),
            description: kind.description().to_string(),
        }
    }
}
