//! VendCheck Domain Layer
//!
//! This crate contains the core data model for VendCheck. It is pure data:
//! the only external dependency is serde, because the request layer
//! serializes these shapes verbatim.
//!
//! ## Key Concepts
//!
//! - **Document**: one uploaded file - a name, an optional type hint, raw text
//! - **FactSet**: everything extracted from one submission, built once,
//!   never mutated afterwards
//! - **Rule / RuleCorpus**: the hand-curated compliance rule pack (R1-R5 in
//!   the reference set), insertion-ordered
//! - **Citation**: a retrieved rule plus its relevance score
//! - **Finding / Checklist**: one pass/fail predicate result with evidence
//!   and citing rules, and the aggregate verdict
//!
//! ## Architecture
//!
//! Extraction, retrieval, and evaluation logic live in sibling crates;
//! this crate only defines the values they exchange.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checklist;
pub mod document;
pub mod facts;
pub mod identifiers;
pub mod rule;

// Re-exports for convenience
pub use checklist::{Checklist, Finding, OverallStatus, Problem};
pub use document::{Document, DocumentClass};
pub use facts::{ContactInfo, FactSet, PastPerformanceEntry, PricingLine};
pub use identifiers::{is_valid_duns, is_valid_naics, is_valid_uei};
pub use rule::{Citation, Rule, RuleCorpus};
