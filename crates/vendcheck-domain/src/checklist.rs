//! Checklist module - findings and the aggregate verdict

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance gap tags, one per way a predicate can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// No UEI found in any document
    MissingUei,
    /// No DUNS found in any document
    MissingDuns,
    /// SAM.gov status absent or not literally "active"
    SamNotActive,
    /// No past-performance records at all
    MissingPastPerformance,
    /// Records exist but none meets the minimum value
    PastPerformanceMinValueNotMet,
    /// Pricing sheet missing, or a row lacks rate/unit
    PricingIncomplete,
}

impl Problem {
    /// Stable snake_case tag, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Problem::MissingUei => "missing_uei",
            Problem::MissingDuns => "missing_duns",
            Problem::SamNotActive => "sam_not_active",
            Problem::MissingPastPerformance => "missing_past_performance",
            Problem::PastPerformanceMinValueNotMet => "past_performance_min_value_not_met",
            Problem::PricingIncomplete => "pricing_incomplete",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pass/fail compliance predicate result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Whether the predicate is required (always true in the current
    /// policy set; carried for forward compatibility with optional checks)
    pub required: bool,

    /// Whether the predicate passed
    pub ok: bool,

    /// Gap tag, absent when `ok`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<Problem>,

    /// Human-readable justification naming the concrete value found or
    /// the nature of the gap
    pub evidence: String,

    /// Rules justifying this finding. Empty only in the degraded case
    /// where the rule corpus produced no matching citation.
    pub rule_ids: Vec<String>,
}

impl Finding {
    /// A passing finding
    pub fn pass(evidence: impl Into<String>, rule_ids: Vec<String>) -> Self {
        Self {
            required: true,
            ok: true,
            problem: None,
            evidence: evidence.into(),
            rule_ids,
        }
    }

    /// A failing finding tagged with its problem
    pub fn fail(problem: Problem, evidence: impl Into<String>, rule_ids: Vec<String>) -> Self {
        Self {
            required: true,
            ok: false,
            problem: Some(problem),
            evidence: evidence.into(),
            rule_ids,
        }
    }
}

/// Aggregate verdict over the finding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// Every finding passed
    Pass,
    /// At least one finding failed
    Fail,
}

impl OverallStatus {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "pass",
            OverallStatus::Fail => "fail",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The evaluated checklist: ordered findings plus the overall verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    /// One finding per predicate, in fixed predicate order
    pub findings: Vec<Finding>,

    /// `fail` iff any finding has `ok = false`
    pub overall_status: OverallStatus,
}

impl Checklist {
    /// Build a checklist, deriving the overall status from the findings.
    /// The status is a pure function of the sequence.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let overall_status = if findings.iter().all(|f| f.ok) {
            OverallStatus::Pass
        } else {
            OverallStatus::Fail
        };
        Self {
            findings,
            overall_status,
        }
    }

    /// True when every finding passed
    pub fn is_pass(&self) -> bool {
        self.overall_status == OverallStatus::Pass
    }

    /// Problem tags of the failing findings, in finding order
    pub fn problems(&self) -> Vec<Problem> {
        self.findings.iter().filter_map(|f| f.problem).collect()
    }

    /// Findings carrying no citing rule - a degraded condition (empty or
    /// non-matching rule corpus), surfaced to callers as a warning
    pub fn uncited_findings(&self) -> usize {
        self.findings.iter().filter(|f| f.rule_ids.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r1() -> Vec<String> {
        vec!["R1".to_string()]
    }

    #[test]
    fn test_all_ok_is_pass() {
        let checklist = Checklist::from_findings(vec![
            Finding::pass("UEI found: ABC123DEF456", r1()),
            Finding::pass("DUNS found: 123456789", r1()),
        ]);
        assert!(checklist.is_pass());
        assert!(checklist.problems().is_empty());
    }

    #[test]
    fn test_one_failure_is_fail() {
        let checklist = Checklist::from_findings(vec![
            Finding::pass("UEI found: ABC123DEF456", r1()),
            Finding::fail(Problem::MissingDuns, "DUNS not found in documents", r1()),
        ]);
        assert_eq!(checklist.overall_status, OverallStatus::Fail);
        assert_eq!(checklist.problems(), vec![Problem::MissingDuns]);
    }

    #[test]
    fn test_uncited_findings_counted() {
        let checklist = Checklist::from_findings(vec![
            Finding::fail(Problem::MissingUei, "UEI not found in documents", vec![]),
            Finding::pass("DUNS found: 123456789", r1()),
        ]);
        assert_eq!(checklist.uncited_findings(), 1);
    }

    #[test]
    fn test_problem_tags_serialize_snake_case() {
        let json = serde_json::to_string(&Problem::PastPerformanceMinValueNotMet).unwrap();
        assert_eq!(json, "\"past_performance_min_value_not_met\"");
        assert_eq!(
            serde_json::to_string(&OverallStatus::Pass).unwrap(),
            "\"pass\""
        );
    }
}
