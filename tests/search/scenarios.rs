//! End-to-end scoring scenarios with hand-computed expectations.
//!
//! The arithmetic here pins the full pipeline: BM25+ presence component,
//! match-type penalty, boosts, per-field accumulation, floor. If one of
//! these moves, ranking changed for every production query.

use super::common::{boosted_engine, engine_with_pages, page_doc};
use wayfinder::{SearchEngine, SearchOptions};

const EPSILON: f64 = 1e-5;

#[test]
fn unboosted_exact_match_falls_below_the_floor() {
    // Single document, exact title hit. BM25+ gives ln(4/3) * 1.5 ≈ 0.4315,
    // the exact-prefix penalty 0.375 brings a field pass to ≈ 0.1618, and
    // two field passes total ≈ 0.3236 - well under the 2.1 floor. The floor
    // applies to singleton results too.
    let engine = engine_with_pages(&[("/a", "Hello", "world")]);
    assert!(engine.search("hello").is_empty());
}

#[test]
fn document_boost_lifts_the_same_match_over_the_floor() {
    let engine = boosted_engine(&[("/a", "Hello", "world")], 20.0);

    let results = engine.search("hello");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "/a");
    // 0.4315231 * 0.375 * 20, accumulated over the title and body passes.
    assert!((results[0].score - 6.472847).abs() < EPSILON);
}

#[test]
fn single_field_configuration_pins_the_per_pass_arithmetic() {
    // With one configured field there is exactly one accumulation pass:
    // idf = ln(4/3), freq = 2.2/2.2 + 0.5, penalty = 0.375, boost = 20.
    let mut options = SearchOptions::new(vec!["title".to_string()], "path".to_string());
    options
        .specific_document_boosts
        .insert("/a".to_string(), 20.0);
    let mut engine = SearchEngine::new(options);
    engine.add_document(&page_doc("/a", "Hello", "world")).unwrap();

    let results = engine.search("hello");
    assert_eq!(results.len(), 1);
    assert!((results[0].score - 3.236423).abs() < EPSILON);
}

#[test]
fn page_path_query_matches_the_whole_indexed_path() {
    // The body value tokenizes to the single term "/dir/page.html"; the
    // same query survives tokenization intact and hits it as an exact
    // prefix.
    let engine = boosted_engine(&[("/x", "foo", "/dir/page.html")], 40.0);

    let results = engine.search("/dir/page.html");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "/x");
    assert!(results[0].score > 2.1);
}

#[test]
fn one_edit_typo_within_budget_is_a_fuzzy_match() {
    // |query| = 5 → budget round(1.75) = 2; "hallo" → "hello" is distance 1
    // and not a prefix, so the fuzzy penalty 0.45 * 5/6 = 0.375 applies.
    let engine = boosted_engine(&[("/a", "hello", "greetings")], 20.0);

    let results = engine.search("hallo");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "/a");
    assert!((results[0].score - 6.472847).abs() < EPSILON);
}

#[test]
fn edits_beyond_the_budget_do_not_match() {
    // |query| = 2 → budget round(0.7) = 1; "hello" is 4 edits away.
    let engine = boosted_engine(&[("/a", "hello", "greetings")], 1000.0);
    assert!(engine.search("xy").is_empty());
}

#[test]
fn prefix_overshoot_scores_below_an_exact_length_match() {
    let engine = boosted_engine(
        &[("/short", "search", "page one"), ("/long", "searchability", "page two")],
        40.0,
    );

    let results = engine.search("search");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "/short");
    assert_eq!(results[1].id, "/long");
    assert!(results[0].score > results[1].score);
}
