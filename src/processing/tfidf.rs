//! TF-IDF vectorization over a single ranking corpus

use crate::processing::text_processor::tokenize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;

/// Why a corpus could not be turned into a term-weight matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizationFailure {
    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error("corpus contains no terms after stop word removal")]
    EmptyVocabulary,
}

/// Term to column index, columns assigned in lexicographic term order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: BTreeMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms = terms.into_iter().enumerate().map(|(idx, term)| (term, idx)).collect();
        Self { terms }
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sparse vector of non-negative term weights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeightVector {
    weights: BTreeMap<usize, f64>,
}

impl TermWeightVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: usize, weight: f64) {
        self.weights.insert(column, weight);
    }

    pub fn get(&self, column: usize) -> f64 {
        self.weights.get(&column).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.values().all(|w| *w == 0.0)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TermWeightVector) -> f64 {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small
            .weights
            .iter()
            .filter_map(|(col, w)| large.weights.get(col).map(|o| w * o))
            .sum()
    }

    /// Scale to unit length; the zero vector is left untouched
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for weight in self.weights.values_mut() {
                *weight /= norm;
            }
        }
    }
}

/// Vectors for every corpus document, aligned with the corpus order
#[derive(Debug, Clone)]
pub struct Vectorized {
    pub vocabulary: Vocabulary,
    pub vectors: Vec<TermWeightVector>,
}

impl Vectorized {
    /// Split into (leading documents, last document)
    pub fn split_last(&self) -> Option<(&TermWeightVector, &[TermWeightVector])> {
        self.vectors.split_last()
    }
}

/// Build a vocabulary over the whole corpus and weight every document with smoothed TF-IDF
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, raw term counts as TF, rows L2-normalised.
pub fn vectorize<S: AsRef<str>>(corpus: &[S]) -> Result<Vectorized, VectorizationFailure> {
    if corpus.is_empty() {
        return Err(VectorizationFailure::EmptyCorpus);
    }

    let term_counts: Vec<HashMap<String, usize>> = corpus
        .iter()
        .map(|doc| {
            let mut counts = HashMap::new();
            for token in tokenize(doc.as_ref()) {
                *counts.entry(token).or_insert(0) += 1;
            }
            counts
        })
        .collect();

    let vocabulary = Vocabulary::from_terms(
        term_counts.iter().flat_map(|counts| counts.keys().cloned()).collect(),
    );
    if vocabulary.is_empty() {
        return Err(VectorizationFailure::EmptyVocabulary);
    }

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for counts in &term_counts {
        for term in counts.keys() {
            if let Some(col) = vocabulary.index_of(term) {
                document_frequency[col] += 1;
            }
        }
    }

    let n = corpus.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors = term_counts
        .iter()
        .map(|counts| {
            let mut vector = TermWeightVector::new();
            for (term, &count) in counts {
                if let Some(col) = vocabulary.index_of(term) {
                    vector.set(col, count as f64 * idf[col]);
                }
            }
            vector.normalize();
            vector
        })
        .collect();

    log::debug!("Vectorized {} documents over {} terms", corpus.len(), vocabulary.len());

    Ok(Vectorized { vocabulary, vectors })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_vocabulary_is_sorted_and_shared() {
        let result = vectorize(&["python docker", "docker rust"]).unwrap();

        assert_eq!(result.vocabulary.len(), 3);
        assert_eq!(result.vocabulary.index_of("docker"), Some(0));
        assert_eq!(result.vocabulary.index_of("python"), Some(1));
        assert_eq!(result.vocabulary.index_of("rust"), Some(2));
        assert_eq!(result.vocabulary.index_of("java"), None);
        assert_eq!(result.vectors.len(), 2);
    }

    #[test]
    fn test_weights_follow_smoothed_idf() {
        let result = vectorize(&["python docker", "docker rust"]).unwrap();
        let doc = &result.vectors[0];

        // docker: df = 2 -> idf 1; python: df = 1 -> idf ln(1.5) + 1
        let docker = 1.0;
        let python = (3.0f64 / 2.0).ln() + 1.0;
        let norm = (docker * docker + python * python).sqrt();

        assert!((doc.get(0) - docker / norm).abs() < EPSILON);
        assert!((doc.get(1) - python / norm).abs() < EPSILON);
        assert_eq!(doc.get(2), 0.0);
        assert!((doc.norm() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_term_frequency_counts() {
        let result = vectorize(&["rust rust python", "python"]).unwrap();
        let doc = &result.vectors[0];
        let python = doc.get(result.vocabulary.index_of("python").unwrap());
        let rust = doc.get(result.vocabulary.index_of("rust").unwrap());
        assert!(rust > python);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let result = vectorize(&["", "kubernetes operator"]).unwrap();
        assert!(result.vectors[0].is_zero());
        assert_eq!(result.vectors[0].norm(), 0.0);
    }

    #[test]
    fn test_degenerate_corpora_fail() {
        let empty: [&str; 0] = [];
        assert_eq!(vectorize(&empty).unwrap_err(), VectorizationFailure::EmptyCorpus);
        assert_eq!(
            vectorize(&["", "the and of", "  "]).unwrap_err(),
            VectorizationFailure::EmptyVocabulary
        );
    }

    #[test]
    fn test_sparse_dot() {
        let mut a = TermWeightVector::new();
        a.set(1, 0.6);
        a.set(4, 0.8);
        let mut b = TermWeightVector::new();
        b.set(4, 1.0);
        assert!((a.dot(&b) - 0.8).abs() < EPSILON);
        assert!((b.dot(&a) - 0.8).abs() < EPSILON);
    }
}
