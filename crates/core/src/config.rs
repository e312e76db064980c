//! Run configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [reject_lists]
//! concepts = "conf/rejected-word-list.txt"
//! methods = "conf/rejected-word-list.txt"
//! types = "conf/rejected-type-list.txt"
//!
//! [thresholds]
//! overlap = 0.2
//! source = 0.0
//! tfidf = 0.0
//! ```
//!
//! Every section is optional. An absent reject-list path means "reject
//! nothing"; a path that points nowhere is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::matcher::{MatcherKind, StructuralVariant};
use crate::reject::{RejectList, RejectLists};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Reject-word files
    pub reject_lists: RejectListPaths,
    /// Default thresholds for matchers that need one
    pub thresholds: ThresholdDefaults,
}

/// Locations of the three reject-word files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RejectListPaths {
    /// Concept, attribute and class names
    pub concepts: Option<PathBuf>,
    /// Method names
    pub methods: Option<PathBuf>,
    /// Parameter and reference types
    pub types: Option<PathBuf>,
}

/// Per-matcher default thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdDefaults {
    /// Overlap matcher
    pub overlap: Option<f64>,
    /// Source structural matcher
    pub source: Option<f64>,
    /// Plain TF-IDF matcher
    pub tfidf: Option<f64>,
}

impl ThresholdDefaults {
    /// Configured default for `kind`, if it uses one
    pub fn for_kind(&self, kind: MatcherKind) -> Option<f64> {
        match kind {
            MatcherKind::Overlap => self.overlap,
            MatcherKind::Structural(StructuralVariant::Source) => self.source,
            MatcherKind::Tfidf => self.tfidf,
            _ => None,
        }
    }
}

impl MatchConfig {
    /// Parse configuration text
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: MatchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// Relative reject-list paths are resolved against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.reject_lists = config.reject_lists.resolved_against(base);
        }
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        let t = &self.thresholds;
        for (field, value) in [
            ("thresholds.overlap", t.overlap),
            ("thresholds.source", t.source),
            ("thresholds.tfidf", t.tfidf),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_string(),
                        reason: format!("{} is outside [0, 1]", v),
                    });
                }
            }
        }
        Ok(())
    }
}

impl RejectListPaths {
    /// Read all configured files.
    ///
    /// Fails on the first missing file, before anything else happens.
    pub fn load(&self) -> ConfigResult<RejectLists> {
        Ok(RejectLists {
            concepts: load_optional(self.concepts.as_deref())?,
            methods: load_optional(self.methods.as_deref())?,
            types: load_optional(self.types.as_deref())?,
        })
    }

    fn resolved_against(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| {
            p.map(|p| if p.is_relative() { base.join(p) } else { p })
        };
        RejectListPaths {
            concepts: resolve(self.concepts),
            methods: resolve(self.methods),
            types: resolve(self.types),
        }
    }
}

fn load_optional(path: Option<&Path>) -> ConfigResult<RejectList> {
    match path {
        Some(p) => RejectList::load(p),
        None => Ok(RejectList::empty()),
    }
}
