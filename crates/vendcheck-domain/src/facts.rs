//! FactSet module - everything extracted from one submission

use crate::document::DocumentClass;
use serde::{Deserialize, Serialize};

/// Primary contact extracted from a profile document.
///
/// Recorded only when both an email-shaped and a phone-shaped token were
/// found; the two searches are independent (the values need not appear on
/// the same line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// First email-shaped token in the document
    pub email: String,
    /// First phone-shaped token in the document
    pub phone: String,
}

/// One past-performance record, split out of a past-performance document.
///
/// Every field is optional; a field is present only when its label was
/// found in the record's block. `value` stays the raw trimmed string
/// (e.g. `"$18,000"`) - numeric coercion happens in the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastPerformanceEntry {
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Contract identifier or description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    /// Contract value, raw as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Period of performance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Reference contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl PastPerformanceEntry {
    /// True when no field was extracted at all
    pub fn is_empty(&self) -> bool {
        self.customer.is_none()
            && self.contract.is_none()
            && self.value.is_none()
            && self.period.is_none()
            && self.contact.is_none()
    }
}

/// One row of a pricing sheet: `labor_category, rate, unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingLine {
    /// Labor category name
    pub labor_category: String,
    /// Rate, raw as written
    pub rate: String,
    /// Rate unit (hour, day, ...)
    pub unit: String,
}

impl PricingLine {
    /// A line is complete when both rate and unit are non-empty
    pub fn is_complete(&self) -> bool {
        !self.rate.is_empty() && !self.unit.is_empty()
    }
}

/// Aggregate facts across all documents of one submission.
///
/// Built once per analysis request and never mutated after construction.
/// Sequences keep encounter order; `naics_codes` keeps duplicates (dedup
/// would change observable output and is deliberately not done here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    /// Unique Entity Identifier (12 alphanumeric chars), first match wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uei: Option<String>,

    /// Legacy DUNS number (9 digits), first match wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duns: Option<String>,

    /// NAICS codes in encounter order, duplicates preserved
    #[serde(default)]
    pub naics_codes: Vec<String>,

    /// SAM.gov registration status, free text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sam_status: Option<String>,

    /// Primary contact, first email + first phone found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<ContactInfo>,

    /// Past-performance records in encounter order
    #[serde(default)]
    pub past_performance: Vec<PastPerformanceEntry>,

    /// Pricing sheet rows in encounter order
    #[serde(default)]
    pub pricing_lines: Vec<PricingLine>,

    /// One class per input document, in input order
    #[serde(default)]
    pub document_types: Vec<DocumentClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry() {
        assert!(PastPerformanceEntry::default().is_empty());
        let entry = PastPerformanceEntry {
            value: Some("$30,000".to_string()),
            ..Default::default()
        };
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_pricing_line_completeness() {
        let line = PricingLine {
            labor_category: "Senior Engineer".to_string(),
            rate: "$185".to_string(),
            unit: "hour".to_string(),
        };
        assert!(line.is_complete());

        let missing_unit = PricingLine {
            unit: String::new(),
            ..line
        };
        assert!(!missing_unit.is_complete());
    }

    #[test]
    fn test_default_factset_is_unset() {
        let facts = FactSet::default();
        assert!(facts.uei.is_none());
        assert!(facts.naics_codes.is_empty());
        assert!(facts.document_types.is_empty());
    }

    #[test]
    fn test_factset_round_trips_json() {
        let facts = FactSet {
            uei: Some("ABC123DEF456".to_string()),
            naics_codes: vec!["541511".to_string(), "541511".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&facts).unwrap();
        let back: FactSet = serde_json::from_str(&json).unwrap();
        // duplicates survive the round trip untouched
        assert_eq!(back, facts);
    }
}
