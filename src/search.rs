//! Query evaluation: matching, accumulation, ranking.
//!
//! The general path walks *every* indexed term for every (field, query-term)
//! pair. That sounds expensive, but it is intrinsic to the match semantics:
//! prefix and fuzzy candidates can live anywhere in the vocabulary, and the
//! corpora this engine targets keep the vocabulary small enough that the
//! exhaustive scan beats maintaining a second index structure. Smarter
//! enumeration (tries, length buckets, edit-distance automata) would be a
//! drop-in change as long as it feeds the scorer the same (term, penalty)
//! pairs.
//!
//! Two match predicates per candidate term:
//! - **prefix**: the indexed term starts with the query term (equality
//!   included); penalized by how far the term overshoots the query.
//! - **fuzzy**: within a length-scaled edit-distance budget and *not* a
//!   prefix; penalized by the distance.
//!
//! A hit is re-scored once per configured field. Postings are not
//! field-qualified, so a term hit counts against every field - with the
//! field's boost applied each time. Ranking depends on this accumulation
//! shape; collapsing it to one score per (document, term) would change the
//! ordering users see.

use crate::index::InvertedIndex;
use crate::levenshtein::levenshtein;
use crate::scoring::{apply_boosts, fuzzy_penalty, prefix_penalty, presence_score};
use crate::store::DocumentStore;
use crate::tokenizer::tokenize;
use crate::types::{Document, FieldValue, SearchOptions, SearchResult};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// The query that short-circuits to the configured initial results.
pub const WILDCARD_QUERY: &str = "*";

/// Results must score strictly above this to be returned.
pub const SCORE_FLOOR: f64 = 2.1;

/// Hard cap on the result list.
pub const MAX_RESULTS: usize = 34;

/// Fuzzy matching never tolerates more edits than this, however long the
/// query term.
pub const MAX_EDIT_DISTANCE: usize = 6;

/// Edit budget per query-term character, before the cap.
pub const FUZZY_LENGTH_RATIO: f64 = 0.35;

/// Edit-distance budget for a query term of the given character length.
pub fn fuzzy_threshold(query_len: usize) -> usize {
    MAX_EDIT_DISTANCE.min((query_len as f64 * FUZZY_LENGTH_RATIO).round() as usize)
}

/// Evaluate `query` against the engine state.
pub(crate) fn execute<F>(
    options: &SearchOptions,
    store: &DocumentStore,
    index: &InvertedIndex,
    query: &str,
    filter: F,
) -> Vec<SearchResult>
where
    F: Fn(&Document) -> bool,
{
    if query == WILDCARD_QUERY {
        return wildcard(options, store, filter);
    }
    ranked(options, store, index, query, filter)
}

/// The wildcard path: configured initial results, in order, score 1.0.
///
/// Ids missing from the store are skipped. No sort, no floor, no cap - the
/// configured list is already curated.
fn wildcard<F>(options: &SearchOptions, store: &DocumentStore, filter: F) -> Vec<SearchResult>
where
    F: Fn(&Document) -> bool,
{
    options
        .initial_results
        .iter()
        .filter_map(|id| store.get(id).map(|document| (id, document)))
        .filter(|(_, document)| filter(document))
        .map(|(id, document)| SearchResult {
            id: id.clone(),
            score: 1.0,
            document: document.clone(),
        })
        .collect()
}

/// The general path: match, score, accumulate, rank.
fn ranked<F>(
    options: &SearchOptions,
    store: &DocumentStore,
    index: &InvertedIndex,
    query: &str,
    filter: F,
) -> Vec<SearchResult>
where
    F: Fn(&Document) -> bool,
{
    // The tokenizer is the single case-fold-and-split authority for both
    // indexed values and queries, so a pasted page path survives as one term.
    let query_terms = tokenize(query);
    if query_terms.is_empty() {
        return Vec::new();
    }

    let total_docs = index.total_documents();
    let avg_len = index.average_document_length();

    // The user predicate runs at most once per candidate document per search.
    let mut filter_cache: HashMap<&str, bool> = HashMap::new();
    // Sorted accumulator: ties in the final sort fall back to id order.
    let mut accumulated: BTreeMap<&str, f64> = BTreeMap::new();

    for field in &options.fields {
        if options.custom_boost_factor_field.as_ref() == Some(field) {
            continue;
        }
        let field_boost = options.boost.get(field).copied();

        for query_term in &query_terms {
            let query_len = query_term.chars().count();
            let max_distance = fuzzy_threshold(query_len);

            for (term, ids) in index.postings() {
                let term_len = term.chars().count();

                let penalty = if term.starts_with(query_term.as_str()) {
                    prefix_penalty(query_len, term_len)
                } else {
                    let distance = levenshtein(query_term, term);
                    if distance > max_distance {
                        continue;
                    }
                    fuzzy_penalty(term_len, distance)
                };

                for id in ids {
                    let Some(document) = store.get(id) else {
                        continue;
                    };
                    let admitted = *filter_cache
                        .entry(id.as_str())
                        .or_insert_with(|| filter(document));
                    if !admitted {
                        continue;
                    }

                    // Presence is guaranteed: `id` came out of this term's
                    // posting set.
                    let base = presence_score(
                        true,
                        index.document_frequency(term),
                        total_docs,
                        index.document_length(id),
                        avg_len,
                    );
                    let score = apply_boosts(
                        base,
                        penalty,
                        options.specific_document_boosts.get(id.as_str()).copied(),
                        field_boost,
                        custom_boost_value(options, document),
                    );

                    *accumulated.entry(id.as_str()).or_insert(0.0) += score;
                }
            }
        }
    }

    let mut results: Vec<SearchResult> = accumulated
        .into_iter()
        .filter_map(|(id, score)| {
            store.get(id).map(|document| SearchResult {
                id: id.to_string(),
                score,
                document: document.clone(),
            })
        })
        .collect();

    // Stable sort over the id-ordered list: equal scores stay in id order.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.retain(|result| result.score > SCORE_FLOOR);
    results.truncate(MAX_RESULTS);
    results
}

/// The document's custom boost value, when the field is configured and
/// present with a numeric value.
fn custom_boost_value(options: &SearchOptions, document: &Document) -> Option<f64> {
    options
        .custom_boost_factor_field
        .as_ref()
        .and_then(|field| document.get(field))
        .and_then(FieldValue::as_number)
}
