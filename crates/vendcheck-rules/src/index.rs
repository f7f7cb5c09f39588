//! Rule index for similarity search

use crate::tfidf::{cosine, Vectorizer};
use std::cmp::Ordering;
use tracing::debug;
use vendcheck_domain::{Citation, RuleCorpus};

/// Vocabulary cap for the fitted vector space. Generous for a single-digit
/// corpus; fitting stays deterministic past the cap (count then lexicographic).
const DEFAULT_MAX_FEATURES: usize = 100;

/// An immutable vector-space index over a rule corpus.
///
/// Each rule's title and content are concatenated into one searchable
/// chunk, and the whole corpus is fitted into one TF-IDF space. Rebuilding
/// is the only way to add or remove rules; with no writers after
/// construction the index is shared freely across concurrent analyses.
#[derive(Debug, Clone)]
pub struct RuleIndex {
    rule_ids: Vec<String>,
    chunks: Vec<String>,
    vectors: Vec<Vec<f64>>,
    vectorizer: Vectorizer,
}

impl RuleIndex {
    /// Build an index over `corpus`, in corpus insertion order.
    pub fn build(corpus: &RuleCorpus) -> Self {
        let rule_ids: Vec<String> = corpus.iter().map(|(id, _)| id.to_string()).collect();
        let chunks: Vec<String> = corpus
            .iter()
            .map(|(_, rule)| rule.searchable_text())
            .collect();

        let vectorizer = Vectorizer::fit(&chunks, DEFAULT_MAX_FEATURES);
        let vectors = chunks.iter().map(|c| vectorizer.transform(c)).collect();

        debug!(
            rules = rule_ids.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "built rule index"
        );
        Self {
            rule_ids,
            chunks,
            vectors,
            vectorizer,
        }
    }

    /// Score every rule against `query` and return the ones above
    /// `threshold`, sorted by descending score.
    ///
    /// The sort is stable, so exact score ties keep corpus insertion
    /// order. An empty or entirely out-of-vocabulary query matches
    /// nothing - abstention, not an error.
    pub fn search(&self, query: &str, threshold: f64) -> Vec<Citation> {
        let query_vector = self.vectorizer.transform(query);

        let mut citations: Vec<Citation> = self
            .rule_ids
            .iter()
            .zip(&self.chunks)
            .zip(&self.vectors)
            .filter_map(|((rule_id, chunk), vector)| {
                let score = cosine(&query_vector, vector);
                (score > threshold).then(|| Citation {
                    rule_id: rule_id.clone(),
                    chunk: chunk.clone(),
                    relevance_score: score,
                })
            })
            .collect();

        citations.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        citations
    }

    /// Number of indexed rules
    pub fn len(&self) -> usize {
        self.rule_ids.len()
    }

    /// True when the index holds no rules
    pub fn is_empty(&self) -> bool {
        self.rule_ids.is_empty()
    }
}
