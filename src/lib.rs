//! In-memory full-text search over site page metadata.
//!
//! This crate ranks short, flat documents (page paths, titles, bodies,
//! breadcrumbs) against free-text queries using BM25+ presence scoring
//! combined with prefix and bounded-edit-distance fuzzy matching, shaped by
//! per-field, per-document, and custom-field boosts.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│    index.rs     │────▶│  search.rs   │
//! │ (lowercase + │     │ (inverted index,│     │ (evaluator:  │
//! │  split, URL  │     │  length table,  │     │  match, rank,│
//! │  bypass)     │     │  counters)      │     │  truncate)   │
//! └──────────────┘     └─────────────────┘     └──────────────┘
//!        │                      │                     │
//!        │              ┌───────┴──────┐       ┌──────┴──────┐
//!        │              │   store.rs   │       │  scoring.rs │
//!        │              │ (projected   │       │ (BM25+,     │
//!        │              │  documents)  │       │  penalties, │
//!        │              └──────────────┘       │  boosts)    │
//!        │                      │              └─────────────┘
//!        ▼                      ▼                     │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        engine.rs                            │
//! │     (SearchEngine: construct / add_document / search)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Ranking in one paragraph
//!
//! Every indexed term is compared against every query term, per configured
//! field. A term that starts with the query term is a prefix match; one
//! within a length-scaled Levenshtein budget is a fuzzy match. Each hit
//! scores as BM25+ (binary presence, document-length normalized) times a
//! match-type penalty, times per-document and per-field boosts, plus an
//! additive custom-field contribution; hits accumulate per document across
//! fields and query terms. Results are sorted by score, floored at
//! [`SCORE_FLOOR`], and capped at [`MAX_RESULTS`]. The query `"*"` bypasses
//! all of this and returns the configured initial results.
//!
//! # Usage
//!
//! ```
//! use wayfinder::{Document, SearchEngine, SearchOptions};
//!
//! let mut options = SearchOptions::new(
//!     vec!["title".to_string(), "body".to_string()],
//!     "path".to_string(),
//! );
//! options
//!     .specific_document_boosts
//!     .insert("/hello".to_string(), 20.0);
//!
//! let mut engine = SearchEngine::new(options);
//!
//! let mut doc = Document::new();
//! doc.insert("path".to_string(), "/hello".into());
//! doc.insert("title".to_string(), "Hello".into());
//! doc.insert("body".to_string(), "world".into());
//! engine.add_document(&doc).unwrap();
//!
//! let results = engine.search("hello");
//! assert_eq!(results[0].id, "/hello");
//! ```

// Module declarations
mod engine;
mod error;
mod index;
mod levenshtein;
mod scoring;
mod search;
mod store;
mod tokenizer;
mod types;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use engine::SearchEngine;
pub use error::EngineError;
pub use index::InvertedIndex;
pub use levenshtein::levenshtein;
pub use scoring::{
    apply_boosts, fuzzy_penalty, prefix_penalty, presence_score, BM25_B, BM25_DELTA, BM25_K1,
    CUSTOM_BOOST_SCALE, FUZZY_WEIGHT, PREFIX_GAP_FACTOR, PREFIX_WEIGHT,
};
pub use search::{
    fuzzy_threshold, FUZZY_LENGTH_RATIO, MAX_EDIT_DISTANCE, MAX_RESULTS, SCORE_FLOOR,
    WILDCARD_QUERY,
};
pub use store::DocumentStore;
pub use tokenizer::tokenize;
pub use types::{Document, FieldValue, SearchOptions, SearchResult};
pub use verify::{verify_engine, InvariantError};
