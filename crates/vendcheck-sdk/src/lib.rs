//! VendCheck SDK
//!
//! The one-stop facade over the compliance core: build an [`Analyzer`]
//! once (it owns the rule corpus and its immutable search index), then run
//! any number of concurrent analyses against it.
//!
//! ```text
//! Documents -> extract -> FactSet -> retrieve -> Citations
//!                                 \-> evaluate -> Checklist
//! ```
//!
//! # Example
//!
//! ```
//! use vendcheck_domain::Document;
//! use vendcheck_sdk::Analyzer;
//!
//! let analyzer = Analyzer::reference();
//! let docs = vec![Document::new(
//!     "profile.txt",
//!     "UEI: ABC123DEF456\nDUNS: 123456789\nSAM.gov: active",
//! )];
//! let analysis = analyzer.analyze(&docs);
//! println!("{}", analysis.checklist.overall_status);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analyzer;
mod error;
mod narrative;
mod types;

pub use analyzer::Analyzer;
pub use error::SdkError;
pub use narrative::{client_email, negotiation_brief};
pub use types::{Analysis, DocumentSummary, RequestId};

// The redaction utility is part of the public surface: storage layers
// redact before persisting (R5 in the reference pack).
pub use vendcheck_extractor::redact;
