//! Term-frequency / inverse-document-frequency vectorizer
//!
//! Fixed-dimension vector space fitted over the rule corpus: lower-cased
//! alphanumeric tokens, a small English stop list, unigrams plus bigrams,
//! smoothed idf, L2-normalized rows, vocabulary capped by corpus count.
//! Queries are projected into the fitted space; out-of-vocabulary terms
//! contribute zero weight.

use std::collections::HashMap;

/// Common English words dropped before ngram building
const STOP_WORDS: [&str; 45] = [
    "a", "all", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have",
    "if", "in", "into", "is", "it", "its", "last", "least", "must", "no", "not", "of", "on",
    "only", "or", "our", "such", "that", "the", "their", "then", "there", "these", "they",
    "this", "to", "was", "were", "will", "with", "within",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lower-cased runs of ASCII alphanumerics
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Stop-filtered unigrams plus bigrams over the remaining token stream
fn terms(text: &str) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut terms = tokens.clone();
    terms.extend(tokens.windows(2).map(|pair| pair.join(" ")));
    terms
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// A TF-IDF vector space fitted over a document collection.
///
/// Immutable after [`Vectorizer::fit`]; `transform` projects any text into
/// the fitted space.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Vectorizer {
    /// Fit the vector space over `texts`.
    ///
    /// When the corpus yields more distinct terms than `max_features`, the
    /// vocabulary keeps the terms with the highest corpus-wide count,
    /// breaking count ties lexicographically, so fitting is deterministic.
    pub fn fit(texts: &[String], max_features: usize) -> Self {
        let doc_counts: Vec<HashMap<String, usize>> =
            texts.iter().map(|t| term_counts(t)).collect();

        // (corpus count, document frequency) per term
        let mut stats: HashMap<String, (usize, usize)> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                let entry = stats.entry(term.clone()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        let mut ranked: Vec<(String, (usize, usize))> = stats.into_iter().collect();
        ranked.sort_by(|(term_a, (count_a, _)), (term_b, (count_b, _))| {
            count_b.cmp(count_a).then_with(|| term_a.cmp(term_b))
        });
        ranked.truncate(max_features);

        let doc_total = texts.len();
        let mut vocabulary = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (index, (term, (_, df))) in ranked.into_iter().enumerate() {
            vocabulary.insert(term, index);
            // smoothed idf, never zero
            idf.push(((1 + doc_total) as f64 / (1 + df) as f64).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Project `text` into the fitted space as an L2-normalized vector.
    ///
    /// A text sharing no vocabulary with the corpus comes out all-zero.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for (term, count) in term_counts(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                vector[index] = count as f64 * self.idf[index];
            }
        }

        let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }

    /// Number of terms in the fitted vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }
}

/// Cosine similarity of two vectors from the same space.
///
/// Rows out of `transform` are already L2-normalized, so this is a dot
/// product; an all-zero vector scores 0 against everything.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
