//! Stem type tags
//!
//! Every stem node records which named element it was extracted from and at
//! which granularity: `*Full` nodes carry the concatenation of all stems of a
//! name, `*Part` nodes carry a single word stem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a stem node in a concept tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConceptStemType {
    /// Whole concept name
    ConceptNameFull,
    /// One word of the concept name
    ConceptNamePart,
    /// Whole attribute name
    AttributeNameFull,
    /// One word of an attribute name
    AttributeNamePart,
    /// Whole attribute identifier
    AttributeIdentifierFull,
    /// One word of an attribute identifier
    AttributeIdentifierPart,
    /// Whole class name
    ClassNameFull,
    /// One word of a class name
    ClassNamePart,
    /// Whole class identifier
    ClassIdentifierFull,
    /// One word of a class identifier
    ClassIdentifierPart,
}

impl ConceptStemType {
    /// Whether this tag marks a word-level node
    pub fn is_part(&self) -> bool {
        matches!(
            self,
            ConceptStemType::ConceptNamePart
                | ConceptStemType::AttributeNamePart
                | ConceptStemType::AttributeIdentifierPart
                | ConceptStemType::ClassNamePart
                | ConceptStemType::ClassIdentifierPart
        )
    }

    /// Part tag paired with this full tag (identity for part tags)
    pub fn part(&self) -> Self {
        match self {
            ConceptStemType::ConceptNameFull => ConceptStemType::ConceptNamePart,
            ConceptStemType::AttributeNameFull => ConceptStemType::AttributeNamePart,
            ConceptStemType::AttributeIdentifierFull => ConceptStemType::AttributeIdentifierPart,
            ConceptStemType::ClassNameFull => ConceptStemType::ClassNamePart,
            ConceptStemType::ClassIdentifierFull => ConceptStemType::ClassIdentifierPart,
            other => *other,
        }
    }

    /// Stable upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptStemType::ConceptNameFull => "CONCEPT_NAME_FULL",
            ConceptStemType::ConceptNamePart => "CONCEPT_NAME_PART",
            ConceptStemType::AttributeNameFull => "ATTRIBUTE_NAME_FULL",
            ConceptStemType::AttributeNamePart => "ATTRIBUTE_NAME_PART",
            ConceptStemType::AttributeIdentifierFull => "ATTRIBUTE_IDENTIFIER_FULL",
            ConceptStemType::AttributeIdentifierPart => "ATTRIBUTE_IDENTIFIER_PART",
            ConceptStemType::ClassNameFull => "CLASS_NAME_FULL",
            ConceptStemType::ClassNamePart => "CLASS_NAME_PART",
            ConceptStemType::ClassIdentifierFull => "CLASS_IDENTIFIER_FULL",
            ConceptStemType::ClassIdentifierPart => "CLASS_IDENTIFIER_PART",
        }
    }
}

impl fmt::Display for ConceptStemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a stem node in a method tree.
///
/// Type names only ever produce a full node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MethodStemType {
    /// Whole method name
    MethodNameFull,
    /// One word of the method name
    MethodNamePart,
    /// Whole parameter name
    ParameterNameFull,
    /// One word of a parameter name
    ParameterNamePart,
    /// Whole parameter type
    ParameterTypeFull,
    /// Whole reference name
    ReferenceNameFull,
    /// One word of a reference name
    ReferenceNamePart,
    /// Whole reference type
    ReferenceTypeFull,
}

impl MethodStemType {
    /// Whether this tag marks a word-level node
    pub fn is_part(&self) -> bool {
        matches!(
            self,
            MethodStemType::MethodNamePart
                | MethodStemType::ParameterNamePart
                | MethodStemType::ReferenceNamePart
        )
    }

    /// Whether this tag marks a declared type
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            MethodStemType::ParameterTypeFull | MethodStemType::ReferenceTypeFull
        )
    }

    /// Part tag paired with this full tag, if the element has parts
    pub fn part(&self) -> Option<Self> {
        match self {
            MethodStemType::MethodNameFull => Some(MethodStemType::MethodNamePart),
            MethodStemType::ParameterNameFull => Some(MethodStemType::ParameterNamePart),
            MethodStemType::ReferenceNameFull => Some(MethodStemType::ReferenceNamePart),
            _ => None,
        }
    }

    /// Stable upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodStemType::MethodNameFull => "METHOD_NAME_FULL",
            MethodStemType::MethodNamePart => "METHOD_NAME_PART",
            MethodStemType::ParameterNameFull => "PARAMETER_NAME_FULL",
            MethodStemType::ParameterNamePart => "PARAMETER_NAME_PART",
            MethodStemType::ParameterTypeFull => "PARAMETER_TYPE_FULL",
            MethodStemType::ReferenceNameFull => "REFERENCE_NAME_FULL",
            MethodStemType::ReferenceNamePart => "REFERENCE_NAME_PART",
            MethodStemType::ReferenceTypeFull => "REFERENCE_TYPE_FULL",
        }
    }
}

impl fmt::Display for MethodStemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
