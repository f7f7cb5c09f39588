//! CLI error type

use thiserror::Error;

/// Errors surfaced to the terminal.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path as given on the command line
        path: String,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// A --hint argument was not of the form `file=class`
    #[error("invalid hint '{0}', expected file=class")]
    InvalidHint(String),

    /// SDK-level failure (corpus loading)
    #[error(transparent)]
    Sdk(#[from] vendcheck_sdk::SdkError),

    /// JSON output serialization failed
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
