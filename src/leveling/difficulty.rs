//! Difficulty scoring
//!
//! Rarer and longer words are harder: `(1 - scaled_frequency) + len / max_len`.

use crate::core::ScoredWord;

/// Score normalized words, keeping input order
///
/// Lengths are counted in characters. The result ranges over `[0, 2]`.
///
/// # Examples
/// ```
/// use search_party::leveling::score;
///
/// let scored = score(&[("cat".to_string(), 1.0), ("elephant".to_string(), 0.0)]);
/// assert!(scored[1].difficulty > scored[0].difficulty);
/// assert!((scored[1].difficulty - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn score(normalized: &[(String, f64)]) -> Vec<ScoredWord> {
    let max_len = normalized
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    normalized
        .iter()
        .map(|(word, scaled)| {
            let length_share = if max_len == 0 {
                0.0
            } else {
                word.chars().count() as f64 / max_len as f64
            };

            ScoredWord {
                word: word.clone(),
                difficulty: (1.0 - scaled) + length_share,
            }
        })
        .collect()
}
