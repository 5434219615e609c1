// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index and its corpus statistics.
//!
//! Presence is binary: a term maps to the *set* of document ids that produced
//! it, with no per-field, per-position, or frequency information. Documents
//! here are short page-metadata records, so one occurrence is as good as
//! five - and posting sets stay small enough to scan exhaustively at query
//! time, which is what the prefix/fuzzy evaluator does.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TERMS_NORMALIZED**: every key is lowercase and non-empty (the
//!    tokenizer is the only writer).
//! 2. **NO_DUPLICATE_POSTINGS**: posting sets contain each id once
//!    (guaranteed by `BTreeSet`).
//! 3. **LENGTHS_DEFINED**: `document_length(id)` is defined for every id
//!    recorded via [`InvertedIndex::record_document`].
//! 4. **FRESH_AVERAGE**: `average_document_length()` reflects every recorded
//!    document; there is no separate finalize step to forget.
//!
//! Sorted maps keep term iteration deterministic. The evaluator accumulates
//! floating-point scores in iteration order, and ordering differences across
//! runs would surface as tie-break flapping in ranked output.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term → posting set, plus the per-document length table and corpus
/// counters the scorer reads.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    /// term → ids of documents that produced it in any indexed field.
    terms: BTreeMap<String, BTreeSet<String>>,
    /// id → summed character length of the document's indexed string fields.
    doc_lengths: HashMap<String, usize>,
    /// Number of documents recorded.
    total_documents: usize,
    /// Sum of all recorded lengths, for the average.
    total_length: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the posting set for `term`. Re-insertion is a no-op.
    pub(crate) fn insert(&mut self, term: String, id: &str) {
        debug_assert!(!term.is_empty(), "tokenizer must not emit empty terms");
        debug_assert_eq!(term, term.to_lowercase(), "terms are indexed lowercase");

        self.terms
            .entry(term)
            .or_default()
            .insert(id.to_string());
    }

    /// Record a document's length and bump the corpus counters.
    ///
    /// Called exactly once per document, after its fields are tokenized.
    pub(crate) fn record_document(&mut self, id: &str, length: usize) {
        self.doc_lengths.insert(id.to_string(), length);
        self.total_documents += 1;
        self.total_length += length;
    }

    /// Number of documents whose posting set contains `term` (exact lookup).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, BTreeSet::len)
    }

    /// Is `id` in the posting set for `term`?
    pub fn contains(&self, term: &str, id: &str) -> bool {
        self.terms.get(term).is_some_and(|ids| ids.contains(id))
    }

    /// All `(term, posting set)` pairs in lexicographic term order.
    pub fn postings(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.terms.iter().map(|(term, ids)| (term.as_str(), ids))
    }

    /// Summed character length of the document's indexed string fields, or 0
    /// for an unknown id.
    pub fn document_length(&self, id: &str) -> usize {
        self.doc_lengths.get(id).copied().unwrap_or(0)
    }

    pub fn has_length(&self, id: &str) -> bool {
        self.doc_lengths.contains_key(id)
    }

    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Mean indexed length across recorded documents, fresh after every add.
    ///
    /// 0.0 on an empty index - callers never score against an empty index
    /// because there are no postings to walk, so the zero never reaches a
    /// denominator.
    pub fn average_document_length(&self) -> f64 {
        if self.total_documents == 0 {
            return 0.0;
        }
        self.total_length as f64 / self.total_documents as f64
    }
}
