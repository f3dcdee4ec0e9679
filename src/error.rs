//! Error types for the autocorrect crate.

use std::io;

use thiserror::Error;

/// Errors raised while configuring an engine or loading a dictionary.
///
/// Querying a constructed engine never fails; every error here happens
/// before the first suggestion is computed (or, for `Io`/`Json`, while a
/// front end is writing its output).
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// The edit-distance threshold must be at least 1.
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(usize),

    /// I/O errors (dictionary files, terminal streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary file whose layout could not be understood.
    #[error("malformed dictionary at line {line}: {message}")]
    MalformedDictionary { line: usize, message: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AutocorrectError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        AutocorrectError::MalformedDictionary {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AutocorrectError>;
