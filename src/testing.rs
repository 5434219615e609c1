//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::engine::SearchEngine;
use crate::types::{Document, SearchOptions};

/// Options every fixture starts from: `title` and `body` searchable, `path`
/// as the id field, no boosts.
pub fn default_options() -> SearchOptions {
    SearchOptions::new(
        vec!["title".to_string(), "body".to_string()],
        "path".to_string(),
    )
}

/// A page-metadata document with the canonical three fields.
pub fn page_doc(path: &str, title: &str, body: &str) -> Document {
    let mut doc = Document::new();
    doc.insert("path".to_string(), path.into());
    doc.insert("title".to_string(), title.into());
    doc.insert("body".to_string(), body.into());
    doc
}

/// An engine over `(path, title, body)` tuples with default options.
pub fn engine_with_pages(pages: &[(&str, &str, &str)]) -> SearchEngine {
    let mut engine = SearchEngine::new(default_options());
    for (path, title, body) in pages {
        engine
            .add_document(&page_doc(path, title, body))
            .expect("fixture documents are well-formed");
    }
    engine
}
