//! Term extraction
//!
//! This module contains:
//! - `canonicalizer`: identifier cleanup and word splitting
//! - `stemmer`: English stemming of canonical words
//!
//! `get_stems` chains both and is what the stem tree builder calls.

pub mod canonicalizer;
pub mod stemmer;

use conceptmatch_core::RejectList;

pub use canonicalizer::{canonicalize, split_camel_case};
pub use stemmer::stem;

/// Canonicalize then stem an identifier.
///
/// # Example
///
/// ```
/// use conceptmatch_core::RejectList;
/// use conceptmatch_engine::search::get_stems;
///
/// let stems = get_stems("computeTotal", &RejectList::empty());
/// assert_eq!(stems, vec!["comput", "total"]);
/// ```
pub fn get_stems(name: &str, rejects: &RejectList) -> Vec<String> {
    stemmer::stem_all(&canonicalize(name, rejects))
}

/// Full term of a name: its stems concatenated without separator.
pub fn full_term<S: AsRef<str>>(stems: &[S]) -> String {
    stems.iter().map(|s| s.as_ref()).collect()
}
