//! Min-max frequency scaling

use crate::core::VocabularyEntry;

/// Scale raw frequencies into `[0, 1]` across the whole vocabulary
///
/// The most frequent word maps to `1.0` and the least frequent to `0.0`.
/// A uniform corpus (every frequency equal) maps every word to `0.0`.
///
/// # Examples
/// ```
/// use search_party::core::VocabularyEntry;
/// use search_party::leveling::normalize;
///
/// let entries = [VocabularyEntry::new("cat", 0.5), VocabularyEntry::new("elephant", 0.001)];
/// let scaled = normalize(&entries);
/// assert_eq!(scaled[0], ("cat".to_string(), 1.0));
/// assert_eq!(scaled[1], ("elephant".to_string(), 0.0));
/// ```
#[must_use]
pub fn normalize(entries: &[VocabularyEntry]) -> Vec<(String, f64)> {
    let (min, max) = entries
        .iter()
        .map(VocabularyEntry::raw_frequency)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
            (lo.min(f), hi.max(f))
        });

    let range = max - min;

    entries
        .iter()
        .map(|entry| {
            let scaled = if range > 0.0 {
                ((entry.raw_frequency() - min) / range).clamp(0.0, 1.0)
            } else {
                0.0
            };
            (entry.word().to_string(), scaled)
        })
        .collect()
}
