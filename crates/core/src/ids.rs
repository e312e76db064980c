//! Identifier newtypes
//!
//! Projects, concepts, methods and classes are keyed by the numeric ids the
//! persistence layer assigns them. Stem nodes are keyed by their slot in a
//! stem forest arena.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifies a project (one ontology plus one code base)
    ProjectId,
    "project"
);
numeric_id!(
    /// Identifies an ontology concept
    ConceptId,
    "concept"
);
numeric_id!(
    /// Identifies a source method
    MethodId,
    "method"
);
numeric_id!(
    /// Identifies the source class owning a method
    ClassId,
    "class"
);

/// Index of a stem node inside its forest arena.
///
/// A `StemId` is only meaningful together with the forest that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StemId(pub u32);

impl StemId {
    /// Slot in the arena
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stem#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_prefix() {
        assert_eq!(ConceptId(7).to_string(), "concept:7");
        assert_eq!(MethodId(12).to_string(), "method:12");
        assert_eq!(StemId(3).to_string(), "stem#3");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ProjectId(42)).unwrap();
        assert_eq!(json, "42");
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectId(42));
    }

    #[test]
    fn test_ordering_follows_numeric_value() {
        let mut ids = vec![MethodId(3), MethodId(1), MethodId(2)];
        ids.sort();
        assert_eq!(ids, vec![MethodId(1), MethodId(2), MethodId(3)]);
    }
}
