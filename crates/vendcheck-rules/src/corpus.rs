//! Rule corpus construction and loading
//!
//! The reference pack (R1-R5) ships in code; deployments may load a
//! different pack from JSON shaped as `rule_id -> {title, content,
//! requirements?, mappings?}`. Key order in the file becomes corpus
//! insertion order, which is the tie-break order for retrieval.

use crate::error::RulesError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use vendcheck_domain::{Rule, RuleCorpus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The hand-curated GSA reference rule pack, R1 through R5.
pub fn reference_pack() -> RuleCorpus {
    let mut corpus = RuleCorpus::new();

    corpus.insert(
        "R1",
        Rule {
            title: "Identity & Registry".to_string(),
            content: "Required: UEI (12 chars), DUNS (9 digits), and active SAM.gov \
                      registration. Primary contact must have valid email and phone."
                .to_string(),
            requirements: strings(&[
                "UEI",
                "DUNS",
                "SAM.gov registration",
                "primary contact email",
                "primary contact phone",
            ]),
            mappings: BTreeMap::new(),
        },
    );

    corpus.insert(
        "R2",
        Rule {
            title: "NAICS & SIN Mapping".to_string(),
            content: "541511 → 54151S, 541512 → 54151S, 541611 → 541611, 518210 → 518210C"
                .to_string(),
            requirements: Vec::new(),
            mappings: BTreeMap::from([
                ("541511".to_string(), "54151S".to_string()),
                ("541512".to_string(), "54151S".to_string()),
                ("541611".to_string(), "541611".to_string()),
                ("518210".to_string(), "518210C".to_string()),
            ]),
        },
    );

    corpus.insert(
        "R3",
        Rule {
            title: "Past Performance".to_string(),
            content: "At least 1 past performance ≥ $25,000 within last 36 months. Must \
                      include customer name, value, period, and contact email."
                .to_string(),
            requirements: strings(&[
                "past performance ≥ $25,000",
                "within last 36 months",
                "customer name",
                "value",
                "period",
                "contact email",
            ]),
            mappings: BTreeMap::new(),
        },
    );

    corpus.insert(
        "R4",
        Rule {
            title: "Pricing & Catalog".to_string(),
            content: "Provide labor categories and rates in a structured sheet. If missing \
                      rate basis or units, flag 'pricing_incomplete'."
                .to_string(),
            requirements: strings(&[
                "labor categories",
                "rates",
                "structured sheet",
                "rate basis",
                "units",
            ]),
            mappings: BTreeMap::new(),
        },
    );

    corpus.insert(
        "R5",
        Rule {
            title: "Submission Hygiene".to_string(),
            content: "All personally identifiable info must be stored in redacted form; \
                      only derived fields and hashes are stored by default."
                .to_string(),
            requirements: strings(&["PII redaction", "derived fields", "hashes"]),
            mappings: BTreeMap::new(),
        },
    );

    corpus
}

/// Parse a corpus from its JSON text.
pub fn corpus_from_json(json: &str) -> Result<RuleCorpus, RulesError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let map = value
        .as_object()
        .ok_or_else(|| RulesError::InvalidCorpus("top level must be an object".to_string()))?;

    let mut corpus = RuleCorpus::new();
    // serde_json is built with preserve_order, so file order is corpus order
    for (rule_id, rule_value) in map {
        let rule: Rule = serde_json::from_value(rule_value.clone()).map_err(|e| {
            RulesError::InvalidCorpus(format!("rule '{rule_id}' has the wrong shape: {e}"))
        })?;
        if rule.title.is_empty() && rule.content.is_empty() {
            return Err(RulesError::InvalidCorpus(format!(
                "rule '{rule_id}' has neither title nor content"
            )));
        }
        corpus.insert(rule_id.clone(), rule);
    }
    Ok(corpus)
}

/// Load a corpus from a JSON file.
pub fn corpus_from_path(path: impl AsRef<Path>) -> Result<RuleCorpus, RulesError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let corpus = corpus_from_json(&json)?;
    info!(path = %path.display(), rules = corpus.len(), "loaded rule corpus");
    Ok(corpus)
}
