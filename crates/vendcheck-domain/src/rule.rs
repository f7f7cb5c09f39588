//! Rule module - the compliance rule pack and retrieval citations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One compliance rule.
///
/// `requirements` and `mappings` are structured extras some rules carry:
/// the reference pack's R2 (NAICS -> SIN) is a pure mapping table, the
/// others list requirement phrases. Both are optional and default empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Short human title, e.g. "Identity & Registry"
    pub title: String,

    /// Citable rule text
    pub content: String,

    /// Requirement phrases, when the rule enumerates any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,

    /// Direct code mappings (NAICS -> SIN for R2), used outside the
    /// scoring path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, String>,
}

impl Rule {
    /// The searchable chunk the index scores against: `"{title}: {content}"`
    pub fn searchable_text(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }
}

/// The rule pack: an insertion-ordered `rule_id -> Rule` collection.
///
/// Process-wide read-only configuration: built once at startup, shared by
/// reference across concurrent analyses, never mutated afterwards. Order
/// matters - exact score ties in retrieval are broken by corpus insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCorpus {
    entries: Vec<(String, Rule)>,
}

impl RuleCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, or replace it in place if the id already exists
    pub fn insert(&mut self, rule_id: impl Into<String>, rule: Rule) {
        let rule_id = rule_id.into();
        if let Some(slot) = self.entries.iter_mut().find(|(id, _)| *id == rule_id) {
            slot.1 = rule;
        } else {
            self.entries.push((rule_id, rule));
        }
    }

    /// Remove a rule by id; returns true if it was present
    pub fn remove(&mut self, rule_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| id != rule_id);
        self.entries.len() != before
    }

    /// Look up a rule by id
    pub fn get(&self, rule_id: &str) -> Option<&Rule> {
        self.entries
            .iter()
            .find(|(id, _)| id == rule_id)
            .map(|(_, rule)| rule)
    }

    /// Iterate `(rule_id, rule)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the corpus holds no rules
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a NAICS code to its GSA SIN via the mapping rule (R2 in the
    /// reference pack). Codes with no mapping come back unchanged, which
    /// matches how the schedule treats unmapped codes.
    pub fn sin_for_naics<'a>(&'a self, naics: &'a str) -> &'a str {
        self.entries
            .iter()
            .find_map(|(_, rule)| rule.mappings.get(naics))
            .map(String::as_str)
            .unwrap_or(naics)
    }
}

/// A retrieved rule with its similarity score.
///
/// Produced fresh per query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Stable rule id, e.g. "R3"
    pub rule_id: String,

    /// The rule's searchable text
    pub chunk: String,

    /// Cosine similarity in 0..1, higher = more relevant
    pub relevance_score: f64,
}
