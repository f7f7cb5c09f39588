//! VendCheck Rules
//!
//! The compliance rule pack and its semantic search index.
//!
//! # Overview
//!
//! The rule corpus is a fixed, hand-curated handful of rule texts (five in
//! the reference pack). Rather than a general search engine, the index is
//! an immutable value object: build once over the whole corpus, share by
//! reference across concurrent analyses, rebuild wholesale when the corpus
//! changes. The corpus size never justifies incremental indexing.
//!
//! # Architecture
//!
//! ```text
//! RuleCorpus -> RuleIndex (TF-IDF vectors) <- query built from FactSet
//!                        \-> Citations (score > threshold, ranked)
//! ```
//!
//! # Example
//!
//! ```
//! use vendcheck_rules::{reference_pack, retrieve, RuleIndex};
//! use vendcheck_domain::FactSet;
//!
//! let index = RuleIndex::build(&reference_pack());
//! let facts = FactSet {
//!     past_performance: vec![Default::default()],
//!     ..Default::default()
//! };
//! let citations = retrieve(&facts, &index);
//! assert_eq!(citations[0].rule_id, "R3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod corpus;
mod error;
mod index;
mod retriever;
mod tfidf;

pub use corpus::{corpus_from_json, corpus_from_path, reference_pack};
pub use error::RulesError;
pub use index::RuleIndex;
pub use retriever::retrieve;
pub use tfidf::Vectorizer;
