//! Source graphs consumed by the matchers
//!
//! These are read-only snapshots of what the persistence layer knows about a
//! project: ontology concepts on one side, instrumented source methods on the
//! other. Only names, identifiers and types feed stem extraction; the rest is
//! carried so results can be reported back.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, ConceptId, MethodId};

/// An ontology concept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Concept id
    pub id: ConceptId,
    /// Concept name as written in the ontology
    pub name: String,
    /// Attributes declared on the concept
    #[serde(default)]
    pub attributes: Vec<ConceptAttribute>,
    /// Source classes the concept is known to be implemented by
    #[serde(default)]
    pub classes: Vec<ConceptClass>,
    /// Outgoing links to other concepts
    #[serde(default)]
    pub links: Vec<ConceptLink>,
}

impl Concept {
    /// Create a concept with no attributes, classes or links
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Concept {
            id: ConceptId(id),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute (builder style)
    pub fn with_attribute(mut self, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.attributes.push(ConceptAttribute {
            name: name.into(),
            identifier: identifier.into(),
        });
        self
    }

    /// Add a class (builder style)
    pub fn with_class(mut self, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.classes.push(ConceptClass {
            name: name.into(),
            identifier: identifier.into(),
        });
        self
    }

    /// Attribute count used for weight normalization, never zero
    pub fn attribute_divisor(&self) -> usize {
        self.attributes.len().max(1)
    }
}

/// A named attribute of a concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptAttribute {
    /// Human-readable attribute name
    pub name: String,
    /// Identifier used for the attribute in code (may be empty)
    #[serde(default)]
    pub identifier: String,
}

/// A source class implementing a concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptClass {
    /// Class name
    pub name: String,
    /// Identifier used for the class in code (may be empty)
    #[serde(default)]
    pub identifier: String,
}

/// Directed relation between two concepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptLink {
    /// Relation qualifier (e.g. "is-a", "part-of")
    pub qualifier: String,
    /// Target concept
    pub target: ConceptId,
}

/// A method found in the analyzed sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMethod {
    /// Method id
    pub id: MethodId,
    /// Owning class id
    #[serde(default)]
    pub class_id: ClassId,
    /// Owning class name
    #[serde(default)]
    pub class_name: String,
    /// Full signature, used when exporting results
    #[serde(default)]
    pub signature: String,
    /// Bare method name
    pub name: String,
    /// Declared parameters
    #[serde(default)]
    pub parameters: Vec<SourceParameter>,
    /// Fields and variables referenced from the method body
    #[serde(default)]
    pub references: Vec<SourceReference>,
}

impl SourceMethod {
    /// Create a method with no parameters or references.
    ///
    /// The signature defaults to `name()`.
    pub fn new(id: u64, class_name: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        SourceMethod {
            id: MethodId(id),
            class_id: ClassId::default(),
            class_name: class_name.into(),
            signature: format!("{}()", name),
            name,
            parameters: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Add a parameter (builder style)
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(SourceParameter {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }

    /// Add a reference (builder style)
    pub fn with_reference(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        origin: ReferenceOrigin,
    ) -> Self {
        self.references.push(SourceReference {
            name: name.into(),
            type_name: type_name.into(),
            origin,
        });
        self
    }
}

/// A declared method parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceParameter {
    /// Parameter name
    pub name: String,
    /// Declared type
    #[serde(rename = "type", default)]
    pub type_name: String,
}

/// A field or variable referenced by a method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    /// Referenced name
    pub name: String,
    /// Declared type
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Where the reference comes from
    #[serde(default)]
    pub origin: ReferenceOrigin,
}

/// Kind of symbol a reference points at. Carried through, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceOrigin {
    /// Class or instance field
    Field,
    /// Local variable
    Variable,
    /// Parameter of an enclosing scope
    Parameter,
    /// Anything the analyzer could not classify
    #[default]
    Unknown,
}
