//! Term extraction: lowercase, then split on spaces and punctuation.
//!
//! One special case: values that look like site-relative `.html` paths are
//! emitted whole. Page paths such as `/guides/setup.html` are the most
//! precise query a user can type, and splitting them into `guides`, `setup`,
//! `html` would destroy exactly the terms the path field exists to provide.
//!
//! The separator class is `\p{Z}` + `\p{P}` plus the four ASCII punctuation
//! ranges. The explicit ranges matter: `$ + < = > ^ | ~` and the backtick are
//! symbols (`\p{S}`) in Unicode, not punctuation, but they still separate
//! words in this engine.
//!
//! Tokenization is idempotent: re-tokenizing an emitted term yields that term
//! back (the path case matches again; the common case contains no separator
//! left to split on).

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of this class separate terms.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\p{Z}\p{P}!-/:-@\[-`{-~]+").expect("separator class compiles")
});

/// A slash followed by a non-whitespace run ending in `.html`, anchored to
/// the end of the value. Matched against the lowercased input, so the suffix
/// check is case-insensitive by construction.
static PATH_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\S*\.html$").expect("path pattern compiles"));

/// Split a field value into lowercase terms.
///
/// Returns the terms in input order. Empty pieces (leading, trailing, or
/// adjacent separators) are dropped, so every returned term is non-empty.
pub fn tokenize(value: &str) -> Vec<String> {
    let lowered = value.to_lowercase();

    if PATH_TERM.is_match(&lowered) {
        return vec![lowered];
    }

    SEPARATORS
        .split(&lowered)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
