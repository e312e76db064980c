//! English stemmer
//!
//! Wraps the Snowball English (Porter2) algorithm. Input words are expected
//! to come out of the canonicalizer, i.e. already lowercase.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

static ENGLISH: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Stem a single word.
///
/// # Examples
///
/// ```
/// use conceptmatch_engine::search::stemmer::stem;
///
/// assert_eq!(stem("running"), "run");
/// assert_eq!(stem("voltage"), "voltag");
/// ```
pub fn stem(word: &str) -> String {
    ENGLISH.stem(word).to_lowercase()
}

/// Stem every word, keeping order.
pub fn stem_all<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| stem(w.as_ref())).collect()
}
