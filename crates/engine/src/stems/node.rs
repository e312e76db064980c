//! Stem node shapes for both sides of a match

use std::fmt;
use std::hash::Hash;

use conceptmatch_core::{ConceptId, ConceptStemType, MethodId, MethodStemType, StemId};

/// Common view of a node stored in a [`StemForest`](super::StemForest).
///
/// Children are split into three groups so that flattening can walk every
/// tree shape the same way: word-level `parts`, two ordered `branches`
/// (attributes then classes, or parameters then references) and `nested`
/// sub-trees (identifiers or declared types).
pub trait StemNode {
    /// Entity that owns the tree
    type Owner: Copy + Eq + Hash + fmt::Debug;
    /// Stem type tag
    type Kind: Copy + Eq + fmt::Debug;

    /// Stemmed term
    fn term(&self) -> &str;
    /// Stem type tag
    fn kind(&self) -> Self::Kind;
    /// Owning entity
    fn owner(&self) -> Self::Owner;
    /// Parent node, `None` for a root
    fn parent(&self) -> Option<StemId>;
    /// Word-level children
    fn parts(&self) -> &[StemId];
    /// The two ordered branch groups
    fn branches(&self) -> [&[StemId]; 2];
    /// Nested sub-trees
    fn nested(&self) -> &[StemId];
}

/// Node of a concept stem tree
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptStem {
    /// Stemmed term
    pub term: String,
    /// Stem type tag
    pub stem_type: ConceptStemType,
    /// Owning concept
    pub concept: ConceptId,
    /// Parent node
    pub parent: Option<StemId>,
    /// Word-level children
    pub parts: Vec<StemId>,
    /// Attribute name sub-trees (root only)
    pub attributes: Vec<StemId>,
    /// Class name sub-trees (root only)
    pub classes: Vec<StemId>,
    /// Identifier sub-trees (attribute and class nodes only)
    pub identifiers: Vec<StemId>,
}

impl ConceptStem {
    pub(crate) fn new(
        term: String,
        stem_type: ConceptStemType,
        concept: ConceptId,
        parent: Option<StemId>,
    ) -> Self {
        ConceptStem {
            term,
            stem_type,
            concept,
            parent,
            parts: Vec::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            identifiers: Vec::new(),
        }
    }
}

impl StemNode for ConceptStem {
    type Owner = ConceptId;
    type Kind = ConceptStemType;

    fn term(&self) -> &str {
        &self.term
    }

    fn kind(&self) -> ConceptStemType {
        self.stem_type
    }

    fn owner(&self) -> ConceptId {
        self.concept
    }

    fn parent(&self) -> Option<StemId> {
        self.parent
    }

    fn parts(&self) -> &[StemId] {
        &self.parts
    }

    fn branches(&self) -> [&[StemId]; 2] {
        [&self.attributes, &self.classes]
    }

    fn nested(&self) -> &[StemId] {
        &self.identifiers
    }
}

/// Node of a method stem tree
#[derive(Debug, Clone, PartialEq)]
pub struct MethodStem {
    /// Stemmed term
    pub term: String,
    /// Stem type tag
    pub stem_type: MethodStemType,
    /// Owning method
    pub method: MethodId,
    /// Parent node
    pub parent: Option<StemId>,
    /// Word-level children
    pub parts: Vec<StemId>,
    /// Parameter name sub-trees (root only)
    pub parameters: Vec<StemId>,
    /// Reference name sub-trees (root only)
    pub references: Vec<StemId>,
    /// Declared type nodes (parameter and reference nodes only)
    pub types: Vec<StemId>,
}

impl MethodStem {
    pub(crate) fn new(
        term: String,
        stem_type: MethodStemType,
        method: MethodId,
        parent: Option<StemId>,
    ) -> Self {
        MethodStem {
            term,
            stem_type,
            method,
            parent,
            parts: Vec::new(),
            parameters: Vec::new(),
            references: Vec::new(),
            types: Vec::new(),
        }
    }
}

impl StemNode for MethodStem {
    type Owner = MethodId;
    type Kind = MethodStemType;

    fn term(&self) -> &str {
        &self.term
    }

    fn kind(&self) -> MethodStemType {
        self.stem_type
    }

    fn owner(&self) -> MethodId {
        self.method
    }

    fn parent(&self) -> Option<StemId> {
        self.parent
    }

    fn parts(&self) -> &[StemId] {
        &self.parts
    }

    fn branches(&self) -> [&[StemId]; 2] {
        [&self.parameters, &self.references]
    }

    fn nested(&self) -> &[StemId] {
        &self.types
    }
}
