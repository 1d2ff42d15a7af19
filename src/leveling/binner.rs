//! Difficulty tiers
//!
//! Splits the difficulty-sorted vocabulary into contiguous levels, easiest
//! first, and draws secret words from them.

use super::{normalize, score};
use crate::core::{ScoredWord, VocabularyEntry};
use crate::error::{GameError, GameResult};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::info;

/// Ordered difficulty tiers, level 1 = easiest
///
/// Every level is non-empty; this is checked at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelTiers {
    levels: Vec<Vec<String>>,
}

/// Partition scored words into `num_levels` tiers
///
/// Words are sorted by ascending difficulty (stable, so ties keep list order).
/// Levels `1..num_levels` receive `count / num_levels` words each and the last
/// level also takes the remainder.
///
/// # Errors
/// Returns `GameError::Config` if `num_levels` is zero or larger than the
/// number of words, since some levels would be empty.
///
/// # Examples
/// ```
/// use search_party::core::ScoredWord;
/// use search_party::leveling::bin;
///
/// let scored = vec![
///     ScoredWord { word: "elephant".into(), difficulty: 2.0 },
///     ScoredWord { word: "cat".into(), difficulty: 0.375 },
/// ];
/// let tiers = bin(&scored, 2).unwrap();
/// assert_eq!(tiers.tier(1).unwrap(), ["cat"]);
/// assert_eq!(tiers.tier(2).unwrap(), ["elephant"]);
/// ```
pub fn bin(scored: &[ScoredWord], num_levels: usize) -> GameResult<LevelTiers> {
    if num_levels == 0 {
        return Err(GameError::Config(
            "number of levels must be at least 1".to_string(),
        ));
    }
    if scored.len() < num_levels {
        return Err(GameError::Config(format!(
            "{} levels requested but the vocabulary only has {} words",
            num_levels,
            scored.len()
        )));
    }

    let mut sorted: Vec<&ScoredWord> = scored.iter().collect();
    sorted.sort_by(|a, b| a.difficulty.total_cmp(&b.difficulty));

    let bin_size = sorted.len() / num_levels;
    let levels: Vec<Vec<String>> = (0..num_levels)
        .map(|i| {
            let start = i * bin_size;
            let end = if i == num_levels - 1 {
                sorted.len()
            } else {
                start + bin_size
            };
            sorted[start..end].iter().map(|s| s.word.clone()).collect()
        })
        .collect();

    let tiers = LevelTiers { levels };
    tiers.validate()?;

    info!(
        levels = num_levels,
        words = scored.len(),
        bin_size,
        "difficulty tiers built"
    );

    Ok(tiers)
}

impl LevelTiers {
    /// Run the full pipeline: normalize, score, bin
    ///
    /// # Errors
    /// Same as [`bin`].
    pub fn build(entries: &[VocabularyEntry], num_levels: usize) -> GameResult<Self> {
        bin(&score(&normalize(entries)), num_levels)
    }

    /// Check that every level has at least one word
    ///
    /// # Errors
    /// Returns `GameError::EmptyLevel` naming the first empty level.
    pub fn validate(&self) -> GameResult<()> {
        match self.levels.iter().position(Vec::is_empty) {
            Some(idx) => Err(GameError::EmptyLevel(idx + 1)),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Words of a level (1-based), or `None` if out of range
    #[must_use]
    pub fn tier(&self, level: usize) -> Option<&[String]> {
        level
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx))
            .map(Vec::as_slice)
    }

    /// Iterate `(level, words)` from easiest to hardest
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.levels
            .iter()
            .enumerate()
            .map(|(idx, words)| (idx + 1, words.as_slice()))
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Draw a secret word uniformly from a level
    ///
    /// # Errors
    /// `GameError::LevelOutOfRange` for an unknown level,
    /// `GameError::EmptyLevel` if the level has no words.
    pub fn choose_word<R: Rng + ?Sized>(&self, level: usize, rng: &mut R) -> GameResult<&str> {
        let words = self.tier(level).ok_or(GameError::LevelOutOfRange {
            level,
            num_levels: self.num_levels(),
        })?;

        words
            .choose(rng)
            .map(String::as_str)
            .ok_or(GameError::EmptyLevel(level))
    }
}
