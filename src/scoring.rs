// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A hit's score is a BM25+ presence component shaped by a match-type
//! penalty, then multiplied by per-document and per-field boosts, plus an
//! additive contribution from the configured custom boost field. The scorer
//! knows nothing about other hits on the same document; accumulation belongs
//! to the evaluator.
//!
//! # Constants
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | `BM25_K1` | 1.2 | Standard saturation; with binary presence it mostly sets the length-norm slope |
//! | `BM25_B` | 0.7 | Slightly below the textbook 0.75 - page metadata is short and uniform |
//! | `BM25_DELTA` | 0.5 | BM25+ lower bound, keeps long-document matches from vanishing |
//! | `PREFIX_WEIGHT` | 0.375 | Prefix matches outrank fuzzy matches of the same term |
//! | `PREFIX_GAP_FACTOR` | 0.3 | How hard prefix overshoot (term longer than query) is punished |
//! | `FUZZY_WEIGHT` | 0.45 | Fuzzy ceiling; at distance ≥ 1 the effective factor drops below prefix |
//! | `CUSTOM_BOOST_SCALE` | 0.011 | Scales raw popularity counts into score range |
//!
//! Domain-tuned against the production corpus; changing them changes ranking
//! for every query.

/// BM25 term-frequency saturation parameter.
pub const BM25_K1: f64 = 1.2;

/// BM25 length-normalization strength.
pub const BM25_B: f64 = 0.7;

/// BM25+ additive lower bound.
pub const BM25_DELTA: f64 = 0.5;

/// Weight of a prefix match.
pub const PREFIX_WEIGHT: f64 = 0.375;

/// Dampening applied per character of prefix overshoot.
pub const PREFIX_GAP_FACTOR: f64 = 0.3;

/// Weight of a fuzzy (edit-distance) match.
pub const FUZZY_WEIGHT: f64 = 0.45;

/// Multiplier turning the custom boost field's raw value into score units.
pub const CUSTOM_BOOST_SCALE: f64 = 0.011;

/// BM25+ presence component for one (document, term) pair.
///
/// `present` is the binary term frequency: the index stores sets, so tf is
/// 0 or 1. `doc_freq` is the term's posting-set size, `total_docs` the corpus
/// size, `doc_len` this document's indexed length, `avg_len` the corpus mean.
///
/// With `tf = 1` and a document of exactly average length this reduces to
/// `idf * 1.5`.
pub fn presence_score(
    present: bool,
    doc_freq: usize,
    total_docs: usize,
    doc_len: usize,
    avg_len: f64,
) -> f64 {
    let tf = if present { 1.0 } else { 0.0 };
    let df = doc_freq as f64;
    let n = total_docs as f64;

    let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
    let norm = 1.0 - BM25_B + BM25_B * (doc_len as f64 / avg_len);
    let freq = tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * norm) + BM25_DELTA;

    idf * freq
}

/// Penalty for a prefix match: the indexed term starts with the query term.
///
/// Overshoot is the length difference; an exact-length match keeps the full
/// `PREFIX_WEIGHT`, and longer indexed terms decay toward it from below.
pub fn prefix_penalty(query_len: usize, term_len: usize) -> f64 {
    debug_assert!(term_len >= query_len, "prefix implies term at least as long");
    let len = term_len as f64;
    let overshoot = (term_len - query_len) as f64;

    PREFIX_WEIGHT * len / (len + PREFIX_GAP_FACTOR * overshoot)
}

/// Penalty for a fuzzy match at the given edit distance.
///
/// Decays with distance relative to the term's length: one edit in a long
/// term costs less than one edit in a short one.
pub fn fuzzy_penalty(term_len: usize, distance: usize) -> f64 {
    let len = term_len as f64;

    FUZZY_WEIGHT * len / (len + distance as f64)
}

/// Shape a presence score into a final hit score.
///
/// Applies, in order: the match-type penalty, the per-document boost, the
/// per-field boost, and the additive custom-field contribution.
pub fn apply_boosts(
    base: f64,
    penalty: f64,
    document_boost: Option<f64>,
    field_boost: Option<f64>,
    custom_boost: Option<f64>,
) -> f64 {
    let mut score = base * penalty;

    if let Some(boost) = document_boost {
        score *= boost;
    }
    if let Some(boost) = field_boost {
        score *= boost;
    }

    score + custom_boost.map_or(0.0, |value| value * CUSTOM_BOOST_SCALE)
}
