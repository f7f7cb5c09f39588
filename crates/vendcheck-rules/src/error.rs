//! Error types for rule corpus loading

use thiserror::Error;

/// Errors that can occur while loading a rule corpus.
///
/// Retrieval itself never errors: an empty or non-matching query is
/// abstention, not failure.
#[derive(Error, Debug)]
pub enum RulesError {
    /// Corpus file could not be read
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus file is not valid JSON
    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus JSON has the wrong shape
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),
}
