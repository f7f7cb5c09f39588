//! The Analyzer facade

use crate::error::SdkError;
use crate::types::{Analysis, DocumentSummary, RequestId};
use std::path::Path;
use tracing::{info, warn};
use vendcheck_checklist::{ChecklistPolicy, Evaluator};
use vendcheck_domain::{Document, Rule, RuleCorpus};
use vendcheck_extractor::{extract, redact};
use vendcheck_rules::{corpus_from_path, reference_pack, retrieve, RuleIndex};

/// Owns the rule corpus, its search index, and the checklist policy.
///
/// Built once at process start; `analyze` takes `&self` and touches no
/// shared mutable state, so one Analyzer serves concurrent requests
/// without locking.
pub struct Analyzer {
    corpus: RuleCorpus,
    index: RuleIndex,
    evaluator: Evaluator,
}

impl Analyzer {
    /// Build an analyzer over `corpus` with the reference policy.
    ///
    /// An empty corpus is degraded but allowed: analyses still run, their
    /// findings just cite no rules.
    pub fn new(corpus: RuleCorpus) -> Self {
        if corpus.is_empty() {
            warn!("rule corpus is empty; findings will carry no citations");
        }
        let index = RuleIndex::build(&corpus);
        Self {
            corpus,
            index,
            evaluator: Evaluator::default_policy(),
        }
    }

    /// Build an analyzer over the bundled reference pack (R1-R5)
    pub fn reference() -> Self {
        Self::new(reference_pack())
    }

    /// Build an analyzer from a corpus JSON file
    pub fn from_corpus_path(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        Ok(Self::new(corpus_from_path(path)?))
    }

    /// Replace the checklist policy
    pub fn with_policy(mut self, policy: ChecklistPolicy) -> Self {
        self.evaluator = Evaluator::new(policy);
        self
    }

    /// Run the full pipeline over one submission.
    ///
    /// Deterministic apart from the fresh request id; never fails - every
    /// data-shape problem downgrades to unset facts and failing findings.
    pub fn analyze(&self, documents: &[Document]) -> Analysis {
        let request_id = RequestId::new();
        let facts = extract(documents);
        let citations = retrieve(&facts, &self.index);
        let checklist = self.evaluator.evaluate(&facts, &citations);

        let document_summaries = documents
            .iter()
            .zip(&facts.document_types)
            .map(|(doc, class)| DocumentSummary {
                name: doc.name.clone(),
                class: *class,
                redacted_chars: redact(&doc.text).chars().count(),
            })
            .collect();

        info!(
            %request_id,
            documents = documents.len(),
            citations = citations.len(),
            status = %checklist.overall_status,
            "analysis complete"
        );
        Analysis {
            request_id,
            document_summaries,
            facts,
            citations,
            checklist,
        }
    }

    /// The rule corpus backing this analyzer
    pub fn corpus(&self) -> &RuleCorpus {
        &self.corpus
    }

    /// Look up a rule by id
    pub fn rule(&self, rule_id: &str) -> Option<&Rule> {
        self.corpus.get(rule_id)
    }

    /// Map a NAICS code to its GSA SIN (identity for unmapped codes)
    pub fn sin_for_naics<'a>(&'a self, naics: &'a str) -> &'a str {
        self.corpus.sin_for_naics(naics)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::reference()
    }
}
