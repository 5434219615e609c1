// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant checks over a built engine.
//!
//! Rather than trusting every write path to have kept the structures
//! consistent, walk the whole engine and prove it. Cheap for the corpus
//! sizes this engine targets, and exactly what property tests want to call
//! after hammering the ingest path with arbitrary documents.
//!
//! Checked invariants:
//! 1. Every id in every posting set is present in the document store.
//! 2. Every stored id has a recorded document length.
//! 3. `total_documents` equals the store size.
//! 4. Indexed terms are non-empty and lowercase.
//! 5. Posting sets are non-empty (a term with no documents should not exist).
//!
//! Duplicate-free posting sets hold by construction (`BTreeSet`) and are not
//! re-checked here.

use crate::engine::SearchEngine;
use std::fmt;

/// A violated engine invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A posting set references an id the store doesn't have.
    DanglingPosting { term: String, id: String },
    /// A stored document has no recorded length.
    MissingDocumentLength { id: String },
    /// The document counter disagrees with the store.
    DocumentCountMismatch { counter: usize, stored: usize },
    /// An indexed term is empty.
    EmptyTerm,
    /// An indexed term is not lowercase.
    TermNotLowercase { term: String },
    /// A term exists with an empty posting set.
    EmptyPostingSet { term: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DanglingPosting { term, id } => {
                write!(f, "posting for '{}' references unknown document '{}'", term, id)
            }
            InvariantError::MissingDocumentLength { id } => {
                write!(f, "document '{}' has no recorded length", id)
            }
            InvariantError::DocumentCountMismatch { counter, stored } => {
                write!(f, "total_documents {} != store size {}", counter, stored)
            }
            InvariantError::EmptyTerm => write!(f, "index contains an empty term"),
            InvariantError::TermNotLowercase { term } => {
                write!(f, "indexed term '{}' is not lowercase", term)
            }
            InvariantError::EmptyPostingSet { term } => {
                write!(f, "term '{}' has an empty posting set", term)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Walk the engine and check every invariant. Returns the first violation.
pub fn verify_engine(engine: &SearchEngine) -> Result<(), InvariantError> {
    let index = engine.index();
    let store = engine.store();

    if index.total_documents() != store.len() {
        return Err(InvariantError::DocumentCountMismatch {
            counter: index.total_documents(),
            stored: store.len(),
        });
    }

    for id in store.ids() {
        if !index.has_length(id) {
            return Err(InvariantError::MissingDocumentLength { id: id.to_string() });
        }
    }

    for (term, ids) in index.postings() {
        if term.is_empty() {
            return Err(InvariantError::EmptyTerm);
        }
        if term != term.to_lowercase() {
            return Err(InvariantError::TermNotLowercase {
                term: term.to_string(),
            });
        }
        if ids.is_empty() {
            return Err(InvariantError::EmptyPostingSet {
                term: term.to_string(),
            });
        }
        for id in ids {
            if !store.contains(id) {
                return Err(InvariantError::DanglingPosting {
                    term: term.to_string(),
                    id: id.clone(),
                });
            }
        }
    }

    Ok(())
}
