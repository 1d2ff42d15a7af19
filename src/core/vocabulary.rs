//! Vocabulary records
//!
//! A `VocabularyEntry` pairs a word with its raw corpus frequency. Entries are
//! created once at load time and never mutated afterwards.

use super::oracle::FrequencyOracle;
use serde::Serialize;

/// A word together with its raw corpus frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyEntry {
    word: String,
    raw_frequency: f64,
}

impl VocabularyEntry {
    /// Create an entry, lowercasing the word
    ///
    /// Negative or non-finite frequencies are stored as `0.0` (an unseen word).
    ///
    /// # Examples
    /// ```
    /// use search_party::core::VocabularyEntry;
    ///
    /// let entry = VocabularyEntry::new("Cat", 0.5);
    /// assert_eq!(entry.word(), "cat");
    /// assert!((entry.raw_frequency() - 0.5).abs() < f64::EPSILON);
    /// ```
    pub fn new(word: impl Into<String>, raw_frequency: f64) -> Self {
        let raw_frequency = if raw_frequency.is_finite() && raw_frequency > 0.0 {
            raw_frequency
        } else {
            0.0
        };

        Self {
            word: word.into().to_lowercase(),
            raw_frequency,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn raw_frequency(&self) -> f64 {
        self.raw_frequency
    }
}

/// A word with its composite difficulty score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub difficulty: f64,
}

/// Look up every word's frequency and build the vocabulary, keeping list order
#[must_use]
pub fn entries_from_words<F>(words: &[String], frequencies: &F) -> Vec<VocabularyEntry>
where
    F: FrequencyOracle + ?Sized,
{
    words
        .iter()
        .map(|word| VocabularyEntry::new(word.as_str(), frequencies.frequency(word)))
        .collect()
}
