// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ingest errors.
//!
//! The engine does no I/O, so the error surface is small: a document either
//! carries a usable id or it doesn't. Failed adds leave the engine exactly as
//! it was - no partial postings, no counter drift.

use std::fmt;

/// Why a document could not be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The configured id field is absent from the document.
    MissingIdField { field: String },
    /// A document with this id is already indexed. Re-adding would either
    /// inflate the corpus counters or require a removal path the engine
    /// doesn't have, so it is rejected outright.
    DuplicateDocument { id: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingIdField { field } => {
                write!(f, "document is missing the id field '{}'", field)
            }
            EngineError::DuplicateDocument { id } => {
                write!(f, "document '{}' is already indexed", id)
            }
        }
    }
}

impl std::error::Error for EngineError {}
