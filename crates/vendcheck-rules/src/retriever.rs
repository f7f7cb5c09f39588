//! Fact-driven rule retrieval

use crate::index::RuleIndex;
use tracing::debug;
use vendcheck_domain::{Citation, FactSet};

/// A rule qualifies as a citation iff its cosine similarity exceeds this
const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Fixed topical phrases, gated on which fact categories are present
const IDENTITY_PHRASE: &str = "UEI DUNS SAM.gov registration";
const NAICS_PHRASE: &str = "NAICS SIN mapping";
const PAST_PERFORMANCE_PHRASE: &str = "past performance requirements";
const PRICING_PHRASE: &str = "pricing labor categories rates";

/// Retrieve the rules relevant to `facts`, ranked by descending score.
///
/// The query concatenates one fixed phrase per non-empty fact category.
/// A submission with no recognizable facts yields an empty query, which
/// retrieves nothing: that is the retriever's abstention behavior, not an
/// error. Retrieval is deterministic for a fixed index.
pub fn retrieve(facts: &FactSet, index: &RuleIndex) -> Vec<Citation> {
    let query = build_query(facts);
    if query.is_empty() {
        debug!("no fact categories present, retrieval abstains");
        return Vec::new();
    }

    let citations = index.search(&query, RELEVANCE_THRESHOLD);
    debug!(%query, citations = citations.len(), "retrieved rules");
    citations
}

fn build_query(facts: &FactSet) -> String {
    let mut parts = Vec::new();
    if facts.uei.is_some() {
        parts.push(IDENTITY_PHRASE);
    }
    if !facts.naics_codes.is_empty() {
        parts.push(NAICS_PHRASE);
    }
    if !facts.past_performance.is_empty() {
        parts.push(PAST_PERFORMANCE_PHRASE);
    }
    if !facts.pricing_lines.is_empty() {
        parts.push(PRICING_PHRASE);
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::reference_pack;
    use vendcheck_domain::{PastPerformanceEntry, PricingLine};

    fn index() -> RuleIndex {
        RuleIndex::build(&reference_pack())
    }

    fn pp_entry() -> PastPerformanceEntry {
        PastPerformanceEntry {
            customer: Some("DOE".to_string()),
            value: Some("$30,000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_facts_abstain() {
        assert!(retrieve(&FactSet::default(), &index()).is_empty());
    }

    #[test]
    fn test_identity_facts_cite_identity_rule() {
        let facts = FactSet {
            uei: Some("ABC123DEF456".to_string()),
            ..Default::default()
        };
        let citations = retrieve(&facts, &index());
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].rule_id, "R1");
    }

    #[test]
    fn test_each_category_reaches_its_rule() {
        let index = index();

        let naics_facts = FactSet {
            naics_codes: vec!["541511".to_string()],
            ..Default::default()
        };
        assert_eq!(retrieve(&naics_facts, &index)[0].rule_id, "R2");

        let pp_facts = FactSet {
            past_performance: vec![pp_entry()],
            ..Default::default()
        };
        assert_eq!(retrieve(&pp_facts, &index)[0].rule_id, "R3");

        let pricing_facts = FactSet {
            pricing_lines: vec![PricingLine {
                labor_category: "Engineer".to_string(),
                rate: "$185".to_string(),
                unit: "hour".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(retrieve(&pricing_facts, &index)[0].rule_id, "R4");
    }

    #[test]
    fn test_retrieval_is_deterministic() {
        let index = index();
        let facts = FactSet {
            uei: Some("ABC123DEF456".to_string()),
            past_performance: vec![pp_entry()],
            pricing_lines: vec![PricingLine {
                labor_category: "Engineer".to_string(),
                rate: "$185".to_string(),
                unit: "hour".to_string(),
            }],
            ..Default::default()
        };

        let first = retrieve(&facts, &index);
        let second = retrieve(&facts, &index);
        assert_eq!(first, second);
        assert!(!first.is_empty());
        assert!(first
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let facts = FactSet {
            past_performance: vec![pp_entry()],
            ..Default::default()
        };
        for citation in retrieve(&facts, &index()) {
            assert!(citation.relevance_score > 0.3);
            assert!(citation.relevance_score <= 1.0 + 1e-9);
        }
    }
}
