//! VendCheck Checklist
//!
//! Applies the fixed set of compliance predicates over an extracted
//! [`FactSet`](vendcheck_domain::FactSet) and produces one
//! [`Finding`](vendcheck_domain::Finding) per predicate.
//!
//! # Overview
//!
//! Five independent predicates, evaluated unconditionally and in fixed
//! order - they never suppress each other:
//!
//! 1. UEI presence (R1)
//! 2. DUNS presence (R1)
//! 3. SAM.gov status contains the literal substring "active" (R1)
//! 4. At least one past-performance entry at or above the minimum value (R3)
//! 5. Pricing rows present and each carrying a rate and a unit (R4)
//!
//! The retrieved citations never change which findings are produced, only
//! which rules the findings list: when retrieval abstained entirely the
//! findings cite an empty rule set, which is degraded-but-non-fatal and
//! logged as a warning.
//!
//! Absence is a compliance gap, never an error; a currency string with no
//! parseable digits degrades to amount 0 rather than failing the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod amount;
mod evaluator;
mod policy;

pub use amount::{format_usd, parse_amount};
pub use evaluator::{evaluate, Evaluator};
pub use policy::ChecklistPolicy;
