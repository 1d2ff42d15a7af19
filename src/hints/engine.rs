//! Adaptive hint selection
//!
//! A hint is a corpus word strictly closer to the secret than anything seen so
//! far (the watermark), but not too close. The acceptance window is
//!
//! ```text
//! (watermark, watermark + 0.2 * hints_given]
//! ```
//!
//! When the window is empty its upper bound grows by 0.05 until a candidate
//! appears. As soon as a widened bound reaches 1.0, the closest word above the
//! watermark is returned deterministically, or `NoMoreHints` if there is none.

use super::table::SimilarityTable;
use crate::core::SimilarityOracle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// Window growth per hint already given
pub const WINDOW_STEP: f64 = 0.2;

/// Upper-bound growth while the window is empty
pub const WIDEN_STEP: f64 = 0.05;

/// How a hint was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    /// Drawn at random from the acceptance window
    Window,
    /// The window ran out; this is the closest remaining word
    Closest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hint {
    pub word: String,
    pub similarity: f64,
    pub kind: HintKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HintOutcome {
    Issued(Hint),
    NoMoreHints,
}

/// Hint selector with its own seedable random source
///
/// The engine never touches round state: raising the watermark, recording the
/// hinted word and charging points is up to the caller.
pub struct HintEngine {
    rng: StdRng,
}

impl HintEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a fixed seed, for reproducible hint sequences
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Score the corpus against the secret and select the next hint
    ///
    /// # Examples
    /// ```
    /// use rustc_hash::FxHashSet;
    /// use search_party::hints::{HintEngine, HintOutcome};
    ///
    /// let corpus: Vec<String> = ["cat", "kitten", "dog"].iter().map(|s| s.to_string()).collect();
    /// let oracle = |_: &str, b: &str| match b {
    ///     "kitten" => Some(0.8),
    ///     "dog" => Some(0.4),
    ///     _ => None,
    /// };
    ///
    /// let mut engine = HintEngine::seeded(1);
    /// let outcome = engine.next_hint("cat", &oracle, 0.3, 1, &FxHashSet::default(), &corpus);
    /// match outcome {
    ///     HintOutcome::Issued(hint) => assert_eq!(hint.word, "dog"),
    ///     HintOutcome::NoMoreHints => unreachable!(),
    /// }
    /// ```
    pub fn next_hint<O>(
        &mut self,
        secret: &str,
        oracle: &O,
        watermark: f64,
        hints_given: usize,
        already_hinted: &FxHashSet<String>,
        corpus: &[String],
    ) -> HintOutcome
    where
        O: SimilarityOracle + ?Sized,
    {
        let table = SimilarityTable::compute(secret, corpus, oracle);
        self.select(&table, watermark, hints_given, already_hinted)
    }

    /// Select the next hint from a precomputed similarity table
    pub fn select(
        &mut self,
        table: &SimilarityTable,
        watermark: f64,
        hints_given: usize,
        already_hinted: &FxHashSet<String>,
    ) -> HintOutcome {
        let pool: Vec<(&str, f64)> = table
            .iter()
            .filter(|(word, s)| *s > watermark && !already_hinted.contains(*word))
            .collect();

        // Windows below -1 hold no similarity, so widening starts there at the latest
        let mut upper = (watermark + WINDOW_STEP * hints_given as f64).max(-1.0);

        loop {
            let candidates: Vec<&(&str, f64)> = pool.iter().filter(|(_, s)| *s <= upper).collect();

            if let Some(&&(word, similarity)) = candidates.choose(&mut self.rng) {
                debug!(word, similarity, upper, candidates = candidates.len(), "hint drawn");
                return HintOutcome::Issued(Hint {
                    word: word.to_string(),
                    similarity,
                    kind: HintKind::Window,
                });
            }

            upper += WIDEN_STEP;
            if upper >= 1.0 || upper.is_nan() {
                break;
            }
            debug!(upper, "no hint candidates, widening window");
        }

        // First of the highest similarities, so ties go to corpus order
        let closest = pool.iter().fold(None::<&(&str, f64)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        });

        match closest {
            Some(&(word, similarity)) => {
                debug!(word, similarity, "window exhausted, returning closest word");
                HintOutcome::Issued(Hint {
                    word: word.to_string(),
                    similarity,
                    kind: HintKind::Closest,
                })
            }
            None => {
                debug!(watermark, "no word above watermark");
                HintOutcome::NoMoreHints
            }
        }
    }
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::new()
    }
}
