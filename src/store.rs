//! Document store: id → projected document.
//!
//! The store keeps only what search results need to display - the id field
//! plus the configured searchable fields - not the full input record. Hosts
//! routinely attach payload columns the engine has no business holding twice.

use crate::types::Document;
use std::collections::BTreeMap;

/// Projection of a source document: the id field plus every configured field
/// actually present on the input. Absent fields stay absent.
pub(crate) fn project(document: &Document, id_field: &str, fields: &[String]) -> Document {
    let mut projected = Document::new();

    if let Some(id_value) = document.get(id_field) {
        projected.insert(id_field.to_string(), id_value.clone());
    }
    for field in fields {
        if let Some(value) = document.get(field) {
            projected.insert(field.clone(), value.clone());
        }
    }

    projected
}

/// Keyed document storage. Insertion-only; the engine offers no removal path.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    docs: BTreeMap<String, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a projected document under its id.
    pub(crate) fn insert(&mut self, id: String, document: Document) {
        self.docs.insert(id, document);
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Stored ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }
}
