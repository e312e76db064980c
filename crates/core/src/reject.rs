//! Reject-word lists
//!
//! A reject list holds words that carry no meaning for matching (`get`, `set`,
//! `int`, ...). Files are line oriented, one word per line; lookups ignore
//! case.

use rustc_hash::FxHashSet;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Case-insensitive set of rejected words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectList {
    words: FxHashSet<String>,
}

impl RejectList {
    /// An empty list that rejects nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a list from words, normalizing case and dropping blanks
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        RejectList { words }
    }

    /// Parse line-oriented text, one word per line
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load a reject file.
    ///
    /// A missing file is a configuration error, not an empty list.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingRejectFile {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text);
        tracing::debug!(
            target: "conceptmatch::config",
            path = %path.display(),
            words = list.len(),
            "loaded reject list"
        );
        Ok(list)
    }

    /// Whether `word` is rejected (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct rejected words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list rejects nothing
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The three reject lists used when building stem trees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectLists {
    /// Applied to concept, attribute and class names
    pub concepts: RejectList,
    /// Applied to method names
    pub methods: RejectList,
    /// Applied to parameter and reference types
    pub types: RejectList,
}
