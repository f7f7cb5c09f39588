//! SDK error type

use thiserror::Error;

/// Errors surfaced by the SDK.
///
/// Analysis itself is a total function; only construction from an external
/// corpus can fail.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rule corpus could not be loaded
    #[error("rule corpus error: {0}")]
    Corpus(#[from] vendcheck_rules::RulesError),
}
