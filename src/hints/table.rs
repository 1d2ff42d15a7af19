//! Per-round similarity table
//!
//! Holds the similarity of every corpus word to the round's secret word. It is
//! computed once per round and reused for every hint.

use crate::core::{SimilarityOracle, similarity_or_fallback};
use rayon::prelude::*;
use tracing::debug;

/// Similarities of corpus words to one secret word, in corpus order
///
/// The secret word itself is never present.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityTable {
    secret: String,
    scores: Vec<(String, f64)>,
}

impl SimilarityTable {
    /// Score every corpus word against the secret using the oracle
    ///
    /// Words the oracle cannot compare score `0.0`.
    pub fn compute<O>(secret: &str, corpus: &[String], oracle: &O) -> Self
    where
        O: SimilarityOracle + ?Sized,
    {
        let secret = secret.to_lowercase();

        let scores: Vec<(String, f64)> = corpus
            .par_iter()
            .filter(|word| word.to_lowercase() != secret)
            .map(|word| (word.clone(), similarity_or_fallback(oracle, &secret, word)))
            .collect();

        debug!(secret = %secret, words = scores.len(), "similarity table computed");

        Self { secret, scores }
    }

    /// Build a table from precomputed scores
    ///
    /// Drops the secret word and replaces non-finite scores with `0.0`.
    ///
    /// # Examples
    /// ```
    /// use search_party::hints::SimilarityTable;
    ///
    /// let table = SimilarityTable::from_scores(
    ///     "cat",
    ///     vec![("cat".into(), 1.0), ("dog".into(), 0.8), ("odd".into(), f64::NAN)],
    /// );
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.get("odd"), Some(0.0));
    /// ```
    #[must_use]
    pub fn from_scores(secret: &str, scores: Vec<(String, f64)>) -> Self {
        let secret = secret.to_lowercase();
        let scores = scores
            .into_iter()
            .filter(|(word, _)| word.to_lowercase() != secret)
            .map(|(word, s)| (word, if s.is_finite() { s } else { 0.0 }))
            .collect();

        Self { secret, scores }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Similarity of a corpus word, if present
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, s)| (w.as_str(), *s))
    }
}
