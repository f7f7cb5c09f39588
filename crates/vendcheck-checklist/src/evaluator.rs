//! The five-predicate checklist evaluator

use crate::amount::{format_usd, parse_amount};
use crate::policy::ChecklistPolicy;
use tracing::warn;
use vendcheck_domain::{Checklist, Citation, FactSet, Finding, Problem};

/// The Evaluator turns extracted facts plus retrieved citations into a
/// checklist verdict.
pub struct Evaluator {
    policy: ChecklistPolicy,
}

impl Evaluator {
    /// Create an Evaluator with the given policy
    pub fn new(policy: ChecklistPolicy) -> Self {
        Self { policy }
    }

    /// Create an Evaluator with the reference policy set
    pub fn default_policy() -> Self {
        Self::new(ChecklistPolicy::default())
    }

    /// Evaluate the five compliance predicates over `facts`.
    ///
    /// Predicates are independent and always all evaluated. `citations`
    /// only decide which rules each finding lists: a finding cites its
    /// anchor rules whenever retrieval produced any citation at all, and
    /// an empty rule set (empty or non-matching corpus, or a submission
    /// with no recognizable facts) is reported with a warning rather than
    /// an error.
    pub fn evaluate(&self, facts: &FactSet, citations: &[Citation]) -> Checklist {
        let findings = vec![
            self.check_uei(facts, citations),
            self.check_duns(facts, citations),
            self.check_sam_status(facts, citations),
            self.check_past_performance(facts, citations),
            self.check_pricing(facts, citations),
        ];

        let checklist = Checklist::from_findings(findings);
        let uncited = checklist.uncited_findings();
        if uncited > 0 {
            warn!(
                uncited,
                "findings carry no citing rule; rule corpus empty or retrieval abstained"
            );
        }
        checklist
    }

    fn check_uei(&self, facts: &FactSet, citations: &[Citation]) -> Finding {
        let rule_ids = cite(citations, &["R1"]);
        match &facts.uei {
            Some(uei) => Finding::pass(format!("UEI found: {uei}"), rule_ids),
            None => Finding::fail(Problem::MissingUei, "UEI not found in documents", rule_ids),
        }
    }

    fn check_duns(&self, facts: &FactSet, citations: &[Citation]) -> Finding {
        let rule_ids = cite(citations, &["R1"]);
        match &facts.duns {
            Some(duns) => Finding::pass(format!("DUNS found: {duns}"), rule_ids),
            None => Finding::fail(
                Problem::MissingDuns,
                "DUNS not found in documents",
                rule_ids,
            ),
        }
    }

    fn check_sam_status(&self, facts: &FactSet, citations: &[Citation]) -> Finding {
        let rule_ids = cite(citations, &["R1"]);
        // literal substring match, documented policy: "registered" does not
        // satisfy it even though a reviewer might accept it
        match &facts.sam_status {
            Some(status) if status.to_lowercase().contains("active") => {
                Finding::pass(format!("SAM.gov status: {status}"), rule_ids)
            }
            _ => Finding::fail(
                Problem::SamNotActive,
                "SAM.gov registration not active",
                rule_ids,
            ),
        }
    }

    fn check_past_performance(&self, facts: &FactSet, citations: &[Citation]) -> Finding {
        let rule_ids = cite(citations, &["R3"]);
        if facts.past_performance.is_empty() {
            return Finding::fail(
                Problem::MissingPastPerformance,
                "No past performance records found",
                rule_ids,
            );
        }

        let min = self.policy.past_performance_min_value;
        let meets_minimum = facts
            .past_performance
            .iter()
            .map(|entry| entry.value.as_deref().map(parse_amount).unwrap_or(0))
            .any(|amount| amount >= min);

        if meets_minimum {
            Finding::pass(
                format!("Past performance ≥ {} found", format_usd(min)),
                rule_ids,
            )
        } else {
            Finding::fail(
                Problem::PastPerformanceMinValueNotMet,
                format!("No past performance ≥ {} found", format_usd(min)),
                rule_ids,
            )
        }
    }

    fn check_pricing(&self, facts: &FactSet, citations: &[Citation]) -> Finding {
        let rule_ids = cite(citations, &["R4"]);
        if facts.pricing_lines.is_empty() {
            return Finding::fail(Problem::PricingIncomplete, "No pricing data found", rule_ids);
        }

        // short-circuit on the first incomplete row; this only changes
        // which evidence is reported, never the verdict
        match facts.pricing_lines.iter().find(|line| !line.is_complete()) {
            Some(line) => Finding::fail(
                Problem::PricingIncomplete,
                format!(
                    "Pricing row '{}' missing rate or unit",
                    line.labor_category
                ),
                rule_ids,
            ),
            None => Finding::pass("Pricing data complete", rule_ids),
        }
    }
}

/// Anchor rules for a finding: listed whenever retrieval produced any
/// citation, empty when it abstained entirely.
fn cite(citations: &[Citation], anchors: &[&str]) -> Vec<String> {
    if citations.is_empty() {
        Vec::new()
    } else {
        anchors.iter().map(|id| id.to_string()).collect()
    }
}

/// Evaluate with the reference policy set.
pub fn evaluate(facts: &FactSet, citations: &[Citation]) -> Checklist {
    Evaluator::default_policy().evaluate(facts, citations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendcheck_domain::{OverallStatus, PastPerformanceEntry, PricingLine};

    fn citation(rule_id: &str) -> Citation {
        Citation {
            rule_id: rule_id.to_string(),
            chunk: String::new(),
            relevance_score: 0.9,
        }
    }

    fn complete_facts() -> FactSet {
        FactSet {
            uei: Some("ABC123DEF456".to_string()),
            duns: Some("123456789".to_string()),
            sam_status: Some("active".to_string()),
            past_performance: vec![PastPerformanceEntry {
                customer: Some("DOE".to_string()),
                value: Some("$30,000".to_string()),
                ..Default::default()
            }],
            pricing_lines: vec![PricingLine {
                labor_category: "Engineer".to_string(),
                rate: "$185".to_string(),
                unit: "hour".to_string(),
            }],
            ..Default::default()
        }
    }

    fn citations() -> Vec<Citation> {
        vec![citation("R1"), citation("R3"), citation("R4")]
    }

    #[test]
    fn test_complete_facts_pass() {
        let checklist = evaluate(&complete_facts(), &citations());
        assert_eq!(checklist.overall_status, OverallStatus::Pass);
        assert_eq!(checklist.findings.len(), 5);
        assert_eq!(checklist.findings[0].evidence, "UEI found: ABC123DEF456");
        assert_eq!(checklist.uncited_findings(), 0);
    }

    #[test]
    fn test_missing_uei() {
        let facts = FactSet {
            uei: None,
            ..complete_facts()
        };
        let checklist = evaluate(&facts, &citations());
        assert_eq!(checklist.overall_status, OverallStatus::Fail);
        assert_eq!(checklist.problems(), vec![Problem::MissingUei]);
        assert_eq!(checklist.findings[0].rule_ids, vec!["R1"]);
    }

    #[test]
    fn test_sam_literal_substring_policy() {
        // "registered" fails: no literal "active" substring
        let registered = FactSet {
            sam_status: Some("registered".to_string()),
            ..complete_facts()
        };
        let checklist = evaluate(&registered, &citations());
        assert_eq!(checklist.problems(), vec![Problem::SamNotActive]);

        // "Active - renewal pending" passes the literal rule
        let active = FactSet {
            sam_status: Some("Active - renewal pending".to_string()),
            ..complete_facts()
        };
        assert!(evaluate(&active, &citations()).is_pass());
    }

    #[test]
    fn test_past_performance_threshold_is_closed() {
        let at_threshold = FactSet {
            past_performance: vec![PastPerformanceEntry {
                value: Some("$25,000".to_string()),
                ..Default::default()
            }],
            ..complete_facts()
        };
        assert!(evaluate(&at_threshold, &citations()).is_pass());

        let below = FactSet {
            past_performance: vec![PastPerformanceEntry {
                value: Some("$24,999".to_string()),
                ..Default::default()
            }],
            ..complete_facts()
        };
        let checklist = evaluate(&below, &citations());
        assert_eq!(
            checklist.problems(),
            vec![Problem::PastPerformanceMinValueNotMet]
        );
        assert_eq!(checklist.findings[3].rule_ids, vec!["R3"]);
        assert_eq!(
            checklist.findings[3].evidence,
            "No past performance ≥ $25,000 found"
        );
    }

    #[test]
    fn test_one_qualifying_entry_suffices() {
        let facts = FactSet {
            past_performance: vec![
                PastPerformanceEntry {
                    value: Some("TBD".to_string()),
                    ..Default::default()
                },
                PastPerformanceEntry {
                    value: None,
                    ..Default::default()
                },
                PastPerformanceEntry {
                    value: Some("$26,000".to_string()),
                    ..Default::default()
                },
            ],
            ..complete_facts()
        };
        assert!(evaluate(&facts, &citations()).is_pass());
    }

    #[test]
    fn test_missing_past_performance() {
        let facts = FactSet {
            past_performance: vec![],
            ..complete_facts()
        };
        let checklist = evaluate(&facts, &citations());
        assert_eq!(
            checklist.problems(),
            vec![Problem::MissingPastPerformance]
        );
    }

    #[test]
    fn test_single_incomplete_pricing_row_fails() {
        let mut facts = complete_facts();
        facts.pricing_lines.push(PricingLine {
            labor_category: "Analyst".to_string(),
            rate: String::new(),
            unit: "hour".to_string(),
        });
        facts.pricing_lines.push(PricingLine {
            labor_category: "Architect".to_string(),
            rate: String::new(),
            unit: String::new(),
        });

        let checklist = evaluate(&facts, &citations());
        assert_eq!(checklist.problems(), vec![Problem::PricingIncomplete]);
        // short-circuit: evidence names the first incomplete row
        assert_eq!(
            checklist.findings[4].evidence,
            "Pricing row 'Analyst' missing rate or unit"
        );
    }

    #[test]
    fn test_empty_pricing_fails() {
        let facts = FactSet {
            pricing_lines: vec![],
            ..complete_facts()
        };
        let checklist = evaluate(&facts, &citations());
        assert_eq!(checklist.problems(), vec![Problem::PricingIncomplete]);
        assert_eq!(checklist.findings[4].evidence, "No pricing data found");
    }

    #[test]
    fn test_no_citations_means_uncited_findings() {
        let checklist = evaluate(&complete_facts(), &[]);
        // verdict unchanged, but every finding cites an empty rule set
        assert!(checklist.is_pass());
        assert_eq!(checklist.uncited_findings(), 5);
    }

    #[test]
    fn test_empty_facts_fail_all_five() {
        let checklist = evaluate(&FactSet::default(), &[]);
        assert_eq!(checklist.overall_status, OverallStatus::Fail);
        assert_eq!(checklist.findings.len(), 5);
        assert!(checklist.findings.iter().all(|f| !f.ok));
    }

    #[test]
    fn test_custom_policy_minimum() {
        let evaluator = Evaluator::new(ChecklistPolicy {
            past_performance_min_value: 10_000,
        });
        let facts = FactSet {
            past_performance: vec![PastPerformanceEntry {
                value: Some("$12,500".to_string()),
                ..Default::default()
            }],
            ..complete_facts()
        };
        assert!(evaluator.evaluate(&facts, &citations()).is_pass());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn uei_finding_mirrors_presence(uei in prop::option::of("[A-Z0-9]{12}")) {
            let facts = FactSet {
                uei: uei.clone(),
                ..Default::default()
            };
            let checklist = evaluate(&facts, &[]);
            prop_assert_eq!(checklist.findings[0].ok, uei.is_some());
            if uei.is_none() {
                prop_assert_eq!(checklist.findings[0].problem, Some(Problem::MissingUei));
            }
        }
    }
}
