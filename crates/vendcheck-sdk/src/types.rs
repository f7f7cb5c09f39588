//! Analysis result types

use serde::{Deserialize, Serialize};
use std::fmt;
use vendcheck_domain::{Checklist, Citation, DocumentClass, FactSet};

/// Unique identifier for one analysis request, UUIDv7-based.
///
/// UUIDv7 sorts chronologically, which keeps request logs greppable in
/// arrival order with no coordination between hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(uuid::Uuid);

impl RequestId {
    /// Generate a fresh request id
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-document ingest summary: what the classifier made of each file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// File name as uploaded
    pub name: String,
    /// Detected (or hinted) document class
    pub class: DocumentClass,
    /// Length of the redacted text, in characters
    pub redacted_chars: usize,
}

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Request id, fresh per analysis
    pub request_id: RequestId,
    /// One summary per input document, in input order
    pub document_summaries: Vec<DocumentSummary>,
    /// Aggregated extracted facts
    pub facts: FactSet,
    /// Retrieved rule citations, ranked by descending relevance
    pub citations: Vec<Citation>,
    /// The evaluated compliance checklist
    pub checklist: Checklist,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_request_id_displays_as_uuid() {
        let id = RequestId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }
}
