//! Document module - one uploaded file and its classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single onboarding document as handed to the core.
///
/// A non-core collaborator is responsible for turning whatever the vendor
/// uploaded (PDF, Word, scan) into plain text before this type is built.
/// Immutable once created; one per uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name as uploaded (used in summaries, never parsed)
    pub name: String,

    /// Optional caller-supplied classification hint.
    ///
    /// When present the hint always wins over keyword classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,

    /// Raw plain text of the document
    pub text: String,
}

impl Document {
    /// Create a document with no type hint
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            text: text.into(),
        }
    }

    /// Attach a type hint
    pub fn with_type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }
}

/// Document section class.
///
/// Produced by one pure classification function in the extractor crate;
/// extraction logic is isolated per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClass {
    /// Company profile (UEI / DUNS / SAM.gov / contact block)
    Profile,
    /// Past-performance records
    PastPerformance,
    /// Labor category pricing sheet
    Pricing,
    /// Nothing recognizable; contributes no facts
    Unknown,
}

impl DocumentClass {
    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentClass::Profile => "profile",
            DocumentClass::PastPerformance => "past_performance",
            DocumentClass::Pricing => "pricing",
            DocumentClass::Unknown => "unknown",
        }
    }

    /// Map a caller-supplied type hint onto a class.
    ///
    /// Hints always win over keyword classification, but a hint naming no
    /// known class is `Unknown` (the document then contributes nothing).
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_lowercase().as_str() {
            "profile" => DocumentClass::Profile,
            "past_performance" => DocumentClass::PastPerformance,
            "pricing" => DocumentClass::Pricing,
            _ => DocumentClass::Unknown,
        }
    }
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = Document::new("profile.txt", "UEI: ABC123DEF456").with_type_hint("profile");
        assert_eq!(doc.name, "profile.txt");
        assert_eq!(doc.type_hint.as_deref(), Some("profile"));
    }

    #[test]
    fn test_class_from_hint() {
        assert_eq!(DocumentClass::from_hint("profile"), DocumentClass::Profile);
        assert_eq!(
            DocumentClass::from_hint("Past_Performance"),
            DocumentClass::PastPerformance
        );
        assert_eq!(DocumentClass::from_hint("pricing"), DocumentClass::Pricing);
        assert_eq!(DocumentClass::from_hint("invoice"), DocumentClass::Unknown);
    }

    #[test]
    fn test_class_serializes_snake_case() {
        let json = serde_json::to_string(&DocumentClass::PastPerformance).unwrap();
        assert_eq!(json, "\"past_performance\"");
    }
}
