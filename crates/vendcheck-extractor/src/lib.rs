//! VendCheck Extractor
//!
//! Turns raw onboarding document text into a typed [`FactSet`].
//!
//! # Overview
//!
//! Extraction is intentionally pattern-driven, not model-driven: each
//! document is classified by keyword heuristics (unless the caller supplied
//! a type hint, which always wins), then mined with the label patterns that
//! class carries. Absence is never an error - a field whose label is not
//! found simply stays unset, and an unrecognized document contributes
//! nothing beyond its `unknown` class tag.
//!
//! # Architecture
//!
//! ```text
//! Documents -> classify -> per-class field patterns -> FactSet
//! ```
//!
//! The crate also houses the shared PII redaction utility ([`redact`]):
//! emails and five phone layouts are replaced with fixed tokens, and the
//! substitution is idempotent on already-redacted text.
//!
//! # Example
//!
//! ```
//! use vendcheck_domain::Document;
//! use vendcheck_extractor::extract;
//!
//! let doc = Document::new("profile.txt", "UEI: ABC123DEF456\nDUNS: 123456789");
//! let facts = extract(&[doc]);
//! assert_eq!(facts.uei.as_deref(), Some("ABC123DEF456"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod classify;
mod extractor;
mod patterns;
mod redact;

pub use classify::classify;
pub use extractor::extract;
pub use redact::{find_emails, find_phones, redact};
