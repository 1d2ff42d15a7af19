//! External collaborators
//!
//! The game never computes semantics or corpus statistics itself. It asks a
//! `SimilarityOracle` how close two words are and a `FrequencyOracle` how
//! common a word is.

use rustc_hash::FxHashMap;
use std::collections::HashMap;

/// Similarity reported for words the oracle cannot compare
pub const FALLBACK_SIMILARITY: f64 = 0.0;

/// Semantic similarity between two words, nominally in `[-1, 1]`
///
/// Returns `None` when either word has no representation. `Sync` because the
/// per-round similarity scan runs in parallel.
pub trait SimilarityOracle: Sync {
    fn similarity(&self, a: &str, b: &str) -> Option<f64>;
}

impl<F> SimilarityOracle for F
where
    F: Fn(&str, &str) -> Option<f64> + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        self(a, b)
    }
}

/// Ask the oracle, mapping failures and non-finite values to the fallback
///
/// # Examples
/// ```
/// use search_party::core::similarity_or_fallback;
///
/// let oracle = |a: &str, _b: &str| if a == "cat" { Some(0.7) } else { None };
/// assert!((similarity_or_fallback(&oracle, "cat", "dog") - 0.7).abs() < 1e-9);
/// assert!(similarity_or_fallback(&oracle, "xyzzy", "dog").abs() < 1e-9);
/// ```
pub fn similarity_or_fallback<O>(oracle: &O, a: &str, b: &str) -> f64
where
    O: SimilarityOracle + ?Sized,
{
    oracle
        .similarity(a, b)
        .filter(|s| s.is_finite())
        .unwrap_or(FALLBACK_SIMILARITY)
}

/// Clamp a similarity for display; negative closeness reads as zero
#[inline]
#[must_use]
pub fn display_similarity(similarity: f64) -> f64 {
    similarity.max(0.0)
}

/// Corpus-derived commonness of a word, `>= 0`
pub trait FrequencyOracle {
    fn frequency(&self, word: &str) -> f64;
}

impl FrequencyOracle for FxHashMap<String, f64> {
    fn frequency(&self, word: &str) -> f64 {
        self.get(word).copied().unwrap_or(0.0)
    }
}

impl FrequencyOracle for HashMap<String, f64> {
    fn frequency(&self, word: &str) -> f64 {
        self.get(word).copied().unwrap_or(0.0)
    }
}
