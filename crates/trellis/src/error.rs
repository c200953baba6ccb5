//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps
//! the error conditions that can occur while turning description text into a
//! topology and back.

use std::io;

use thiserror::Error;

use trellis_parser::error::{Diagnostic, ParseError};

use crate::store::StoreError;

/// The main error type for Trellis operations.
///
/// # Diagnostic Variants
///
/// `Parse` and `Invalid` carry structured diagnostics together with the source
/// text they point into, so callers can render labeled spans.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("fabric description is invalid ({} rule(s) failed)", diagnostics.len())]
    Invalid {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(String),
}

impl TrellisError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Invalid` error with the associated source code.
    pub fn new_invalid(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::Invalid {
            diagnostics,
            src: src.into(),
        }
    }
}

impl From<serde_yaml::Error> for TrellisError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Serialize(error.to_string())
    }
}

impl From<serde_json::Error> for TrellisError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialize(error.to_string())
    }
}
