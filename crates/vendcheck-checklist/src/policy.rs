//! Checklist policy knobs

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the evaluator.
///
/// The predicates themselves are fixed; only their numbers move between
/// policy sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistPolicy {
    /// Minimum qualifying past-performance value, whole dollars.
    /// The bound is closed: an entry at exactly this value passes.
    pub past_performance_min_value: u64,
}

impl ChecklistPolicy {
    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.past_performance_min_value == 0 {
            return Err("past_performance_min_value must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ChecklistPolicy {
    /// Reference policy set: $25,000 minimum (R3)
    fn default() -> Self {
        Self {
            past_performance_min_value: 25_000,
        }
    }
}
