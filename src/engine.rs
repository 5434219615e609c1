// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine facade: configuration, ingest, and search entry points.
//!
//! One instance owns one corpus. `add_document` runs tokenizer → inverted
//! index → store to completion; `search` runs the evaluator over immutable
//! state. There is no internal locking - the engine is built to sit inside a
//! single-threaded host (a worker context driven by messages), and callers
//! observe strict happens-before across sequential calls.

use crate::error::EngineError;
use crate::index::InvertedIndex;
use crate::search;
use crate::store::{project, DocumentStore};
use crate::tokenizer::tokenize;
use crate::types::{Document, SearchOptions, SearchResult};

/// An in-memory search engine over flat page-metadata documents.
///
/// # Example
///
/// ```
/// use wayfinder::{Document, SearchEngine, SearchOptions};
///
/// let mut engine = SearchEngine::new(SearchOptions::new(
///     vec!["title".to_string(), "body".to_string()],
///     "path".to_string(),
/// ));
///
/// let mut doc = Document::new();
/// doc.insert("path".to_string(), "/hello".into());
/// doc.insert("title".to_string(), "Hello world".into());
/// engine.add_document(&doc).unwrap();
///
/// assert_eq!(engine.document_count(), 1);
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    options: SearchOptions,
    store: DocumentStore,
    index: InvertedIndex,
}

impl SearchEngine {
    /// An empty engine with the given configuration.
    pub fn new(options: SearchOptions) -> Self {
        SearchEngine {
            options,
            store: DocumentStore::new(),
            index: InvertedIndex::new(),
        }
    }

    /// Ingest one document: project it into the store, tokenize its string
    /// fields into the inverted index, and record its length.
    ///
    /// Fails without touching engine state if the id field is absent or the
    /// id is already indexed. Numeric fields are stored for display and the
    /// custom-boost lookup but are neither tokenized nor counted toward
    /// document length.
    pub fn add_document(&mut self, document: &Document) -> Result<(), EngineError> {
        let id = document
            .get(&self.options.id_field)
            .ok_or_else(|| EngineError::MissingIdField {
                field: self.options.id_field.clone(),
            })?
            .to_id_string();

        if self.store.contains(&id) {
            return Err(EngineError::DuplicateDocument { id });
        }

        let mut total_length = 0;
        for field in &self.options.fields {
            let Some(text) = document.get(field).and_then(|value| value.as_text()) else {
                continue;
            };
            total_length += text.chars().count();
            for term in tokenize(text) {
                self.index.insert(term, &id);
            }
        }

        self.index.record_document(&id, total_length);
        self.store.insert(
            id,
            project(document, &self.options.id_field, &self.options.fields),
        );
        Ok(())
    }

    /// Ranked search. See the crate docs for match and ranking semantics.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_with_filter(query, |_| true)
    }

    /// Ranked search with a caller-supplied document predicate.
    ///
    /// The predicate is pure from the engine's point of view and is invoked
    /// at most once per candidate document per search; rejected documents
    /// accumulate no score at all.
    pub fn search_with_filter<F>(&self, query: &str, filter: F) -> Vec<SearchResult>
    where
        F: Fn(&Document) -> bool,
    {
        search::execute(&self.options, &self.store, &self.index, query, filter)
    }

    /// The configuration this engine was constructed with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The projected-document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The inverted index and corpus statistics.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Mean indexed character length across documents.
    pub fn average_document_length(&self) -> f64 {
        self.index.average_document_length()
    }
}
