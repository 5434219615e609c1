// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search engine instance.
//!
//! Documents here are flat records straight off the host's wire: string keys
//! mapping to string or numeric values. One configured key (the id field)
//! identifies the document; the rest are either searchable text fields or
//! payload the engine carries along for display.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: flat. Nested values don't exist in this model; the host
//!   flattens before handing records over.
//! - **SearchOptions**: immutable once the engine is constructed. Changing
//!   boosts after documents are indexed would silently skew ranking, so the
//!   engine takes ownership and never hands back a mutable reference.
//! - **SearchResult**: `document` is the *projected* document (id field plus
//!   configured fields), not the original input record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single field value: the only two shapes the host's records contain.
///
/// Untagged so JSON documents deserialize directly: `"hello"` becomes
/// `Text`, `3.5` becomes `Number`. Numbers never get tokenized or counted
/// toward document length; they exist for display and for the custom boost
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// The text content, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// The numeric content, if this is a numeric field.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Number(n) => Some(*n),
        }
    }

    /// Stringify for use as a document id.
    ///
    /// Numbers render via `Display`, so `FieldValue::Number(7.0)` becomes
    /// `"7"` - matching how the host's scripting side stringifies ids.
    pub fn to_id_string(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// A flat key/value record as supplied by the host.
///
/// `BTreeMap` rather than `HashMap` so field iteration is deterministic -
/// score accumulation sums floats, and summing in a different order across
/// runs would make tie-breaking flap.
pub type Document = BTreeMap<String, FieldValue>;

/// Engine configuration, fixed at construction.
///
/// Field names are serde-renamed to camelCase so the host's JSON config
/// deserializes without a translation layer.
///
/// # Example
///
/// ```
/// use wayfinder::SearchOptions;
///
/// let options = SearchOptions::new(
///     vec!["title".to_string(), "body".to_string()],
///     "path".to_string(),
/// );
/// assert!(options.boost.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Ordered list of field names to index and to iterate during search.
    pub fields: Vec<String>,
    /// Field whose value is the document id.
    pub id_field: String,
    /// Optional numeric field whose value contributes an additive boost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_boost_factor_field: Option<String>,
    /// Multiplicative per-field boost factors.
    #[serde(default)]
    pub boost: HashMap<String, f64>,
    /// Multiplicative per-document boost factors, keyed by document id.
    #[serde(default)]
    pub specific_document_boosts: HashMap<String, f64>,
    /// Document ids returned, in order, for the wildcard query `"*"`.
    #[serde(default)]
    pub initial_results: Vec<String>,
}

impl SearchOptions {
    /// Options with the given searchable fields and id field; everything
    /// else empty.
    pub fn new(fields: Vec<String>, id_field: String) -> Self {
        SearchOptions {
            fields,
            id_field,
            custom_boost_factor_field: None,
            boost: HashMap::new(),
            specific_document_boosts: HashMap::new(),
            initial_results: Vec::new(),
        }
    }
}

/// What users see when they get a search result.
///
/// `document` is the projected document from the store, ready for display;
/// `score` is the accumulated relevance (or exactly `1.0` on the wildcard
/// path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    pub document: Document,
}
