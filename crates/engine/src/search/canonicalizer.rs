//! Identifier canonicalizer
//!
//! Pipeline: strip decorations → trim Hungarian prefix → drop diacritics
//!           → split camel case → lowercase, reject, dedupe

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use conceptmatch_core::RejectList;

/// Pointer and path decorations, removed outright.
const REMOVED: &[char] = &['~', '/', '\\'];

/// Operators and punctuation, replaced by a space.
const SPACED: &[char] = &[
    '-', '+', '*', '&', ',', '.', '<', '>', ';', ':', '(', ')', '{', '}',
];

/// Scope prefix, then any run of type tags, then a capitalized name.
static HUNGARIAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:m_|g_|s_|l_)?(?:class|char|C|rgb|str|ar|by|dw|fd|pt|sz|a|b|c|d|f|h|i|l|n|o|p|s|t|u|v|w)*(?P<varname>\p{Lu}\w+)$",
    )
    .expect("hungarian prefix pattern")
});

/// Canonicalize an identifier into ordered, distinct, lowercase words.
///
/// Words found in `rejects` are dropped. Empty input yields no words.
///
/// # Example
///
/// ```
/// use conceptmatch_core::RejectList;
/// use conceptmatch_engine::search::canonicalizer::canonicalize;
///
/// let rejects = RejectList::from_words(["get"]);
/// assert_eq!(canonicalize("getVoltage()", &rejects), vec!["voltage"]);
/// assert_eq!(canonicalize("m_strBatteryName", &rejects), vec!["battery", "name"]);
/// ```
pub fn canonicalize(identifier: &str, rejects: &RejectList) -> Vec<String> {
    if identifier.is_empty() {
        return Vec::new();
    }

    let cleaned = strip_decorations(identifier);
    let plain = strip_diacritics(trim_hungarian(&cleaned));

    let mut seen = FxHashSet::default();
    split_camel_case(&plain)
        .into_iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty())
        .filter(|w| !rejects.contains(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Remove decoration characters and turn operators into spaces.
pub fn strip_decorations(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !REMOVED.contains(c))
        .map(|c| if SPACED.contains(&c) { ' ' } else { c })
        .collect()
}

/// Drop a leading Hungarian-notation prefix (`m_`, `lpsz`, `dw`, ...).
///
/// Only applies when the whole trimmed identifier is a prefix followed by a
/// capitalized name; anything else is returned unchanged.
pub fn trim_hungarian(identifier: &str) -> &str {
    HUNGARIAN
        .captures(identifier.trim())
        .and_then(|caps| caps.name("varname"))
        .map(|m| m.as_str())
        .unwrap_or(identifier)
}

/// Decompose to NFD and drop combining marks.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[inline]
fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Split an identifier on separators and case changes.
///
/// A run of capitals stays one word unless it is followed by a lowercase
/// letter, in which case its last capital opens the next word.
///
/// | input | words |
/// |-------|-------|
/// | `TestCPTSmall` | `Test`, `CPT`, `Small` |
/// | `CBatFluM0` | `C`, `Bat`, `Flu`, `M0` |
/// | `_Petits_Calculs_` | `Petits`, `Calculs` |
/// | `dE` | `d`, `E` |
pub fn split_camel_case(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();

    let mut prev_upper = false;
    let mut prev_separator = true;
    let mut capital_run = false;

    for ch in text.chars() {
        let upper = ch.is_uppercase();

        if upper && prev_upper {
            word.push(ch);
            capital_run = true;
        } else if is_separator(ch) {
            prev_upper = false;
            prev_separator = true;
            capital_run = false;
        } else if prev_separator || (upper && !prev_upper) {
            flush(&mut words, &mut word);
            word.push(ch);
            prev_upper = upper;
            prev_separator = false;
            capital_run = false;
        } else if prev_upper && capital_run {
            let opener = word.pop();
            flush(&mut words, &mut word);
            word.extend(opener);
            word.push(ch);
            prev_upper = false;
            capital_run = false;
        } else {
            word.push(ch);
            prev_upper = false;
        }
    }

    flush(&mut words, &mut word);
    words
}

fn flush(words: &mut Vec<String>, word: &mut String) {
    if !word.is_empty() {
        words.push(std::mem::take(word));
    }
}
