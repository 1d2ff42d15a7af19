//! Difficulty tier building and reporting

use crate::core::{FrequencyOracle, entries_from_words};
use crate::error::GameResult;
use crate::leveling::LevelTiers;
use serde::Serialize;
use tracing::info;

/// Vocabulary with its tiers, ready to start a game
#[derive(Debug, Clone)]
pub struct PreparedVocabulary {
    /// Every word in file order; doubles as the hint corpus
    pub words: Vec<String>,
    pub tiers: LevelTiers,
}

/// Score and bin a vocabulary
///
/// # Errors
/// `GameError::Config` if there are fewer words than levels.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use search_party::commands::prepare_vocabulary;
///
/// let freqs: FxHashMap<String, f64> =
///     [("cat".to_string(), 0.5), ("elephant".to_string(), 0.001)].into_iter().collect();
/// let words = vec!["cat".to_string(), "elephant".to_string()];
///
/// let prepared = prepare_vocabulary(words, &freqs, 2).unwrap();
/// assert_eq!(prepared.tiers.tier(1).unwrap(), ["cat"]);
/// ```
pub fn prepare_vocabulary<F: FrequencyOracle>(
    words: Vec<String>,
    frequencies: &F,
    num_levels: usize,
) -> GameResult<PreparedVocabulary> {
    let entries = entries_from_words(&words, frequencies);
    let tiers = LevelTiers::build(&entries, num_levels)?;
    info!(words = words.len(), levels = num_levels, "vocabulary prepared");
    Ok(PreparedVocabulary { words, tiers })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierReport {
    pub level: usize,
    pub words: usize,
    /// Easiest words of the tier
    pub sample: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub total_words: usize,
    pub levels: Vec<TierReport>,
}

/// Summarize tiers, keeping up to `sample` words from each
#[must_use]
pub fn build_level_report(tiers: &LevelTiers, sample: usize) -> LevelReport {
    LevelReport {
        total_words: tiers.total_words(),
        levels: tiers
            .iter()
            .map(|(level, words)| TierReport {
                level,
                words: words.len(),
                sample: words.iter().take(sample).cloned().collect(),
            })
            .collect(),
    }
}
