//! Round state machine
//!
//! ```text
//! AwaitingGuess ──guess──▶ AwaitingGuess
//!       │
//!       ├──exact guess──▶ Solved
//!       └──forfeit──────▶ Forfeited
//! ```
//!
//! `Solved` and `Forfeited` are terminal; every command afterwards fails with
//! `RoundError::RoundOver`.

use crate::config::GameConfig;
use crate::core::{SimilarityOracle, similarity_or_fallback};
use crate::error::RoundError;
use crate::hints::{HintEngine, HintOutcome, SimilarityTable};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, info};

/// Similarities above this for a non-matching word are reported as near-perfect
pub const NEAR_PERFECT: f64 = 0.9999;

/// Letters that always stay hidden by the reveal mechanism
pub const MIN_CONCEALED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    AwaitingGuess,
    Solved,
    Forfeited,
}

/// Scoring rules for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub max_points: u32,
    pub hint_penalty: u32,
    pub reveal_penalty: u32,
    pub guess_penalty: u32,
}

impl From<&GameConfig> for RoundRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            max_points: config.max_points,
            hint_penalty: config.hint_penalty,
            reveal_penalty: config.reveal_penalty,
            guess_penalty: config.guess_penalty,
        }
    }
}

impl Default for RoundRules {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// Where a history row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Guess,
    Hint,
}

/// A numbered row of the round's guess/hint history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub number: usize,
    pub word: String,
    pub similarity: f64,
    pub source: EntrySource,
}

/// Mutable per-round record
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: String,
    guessed: FxHashSet<String>,
    watermark: f64,
    hints_given: FxHashSet<String>,
    letters_revealed: usize,
    points: u32,
    history: Vec<HistoryEntry>,
}

impl RoundState {
    fn new(secret: &str, points: u32) -> Self {
        Self {
            secret: secret.trim().to_lowercase(),
            guessed: FxHashSet::default(),
            watermark: 0.0,
            hints_given: FxHashSet::default(),
            letters_revealed: 0,
            points,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Best similarity seen this round, from guesses or hints
    #[must_use]
    pub const fn watermark(&self) -> f64 {
        self.watermark
    }

    /// Distinct guesses, the winning guess included
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.guessed.len()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.guessed.contains(&word.trim().to_lowercase())
    }

    #[must_use]
    pub fn hints_used(&self) -> usize {
        self.hints_given.len()
    }

    #[must_use]
    pub const fn hints_given(&self) -> &FxHashSet<String> {
        &self.hints_given
    }

    #[must_use]
    pub const fn letters_revealed(&self) -> usize {
        self.letters_revealed
    }

    /// Points still available this round
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn record(&mut self, word: &str, similarity: f64, source: EntrySource) {
        self.history.push(HistoryEntry {
            number: self.history.len() + 1,
            word: word.to_string(),
            similarity,
            source,
        });
    }
}

/// Final numbers of a finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub level: usize,
    pub secret: String,
    pub solved: bool,
    pub points_awarded: u32,
    pub max_points: u32,
    pub guesses: usize,
    pub hints: usize,
    pub letters_revealed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// Exact match; the round is over
    Solved(RoundSummary),
    Scored {
        word: String,
        similarity: f64,
        improved: bool,
    },
    /// Vector similarity is practically 1.0 but the word is not the secret
    NearPerfect { word: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed { pattern: String, revealed: usize },
    Unavailable,
}

/// One round: a secret word and everything the player does to find it
pub struct RoundSession {
    level: usize,
    rules: RoundRules,
    state: RoundState,
    phase: RoundPhase,
    table: Option<SimilarityTable>,
}

impl RoundSession {
    #[must_use]
    pub fn new(level: usize, secret: &str, rules: RoundRules) -> Self {
        let state = RoundState::new(secret, rules.max_points);
        info!(level, letters = state.secret.chars().count(), "round started");

        Self {
            level,
            rules,
            state,
            phase: RoundPhase::AwaitingGuess,
            table: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != RoundPhase::AwaitingGuess
    }

    /// Score a guess against the secret word
    ///
    /// Guesses are trimmed and lowercased before comparison.
    ///
    /// # Errors
    /// `EmptyGuess` for blank input, `DuplicateGuess` for a repeated word
    /// (state untouched), `RoundOver` once the round has ended.
    ///
    /// # Examples
    /// ```
    /// use search_party::session::{GuessOutcome, RoundRules, RoundSession};
    ///
    /// let oracle = |_: &str, _: &str| Some(0.4);
    /// let mut round = RoundSession::new(1, "cat", RoundRules::default());
    ///
    /// assert!(matches!(round.submit_guess("dog", &oracle), Ok(GuessOutcome::Scored { .. })));
    /// match round.submit_guess("CAT", &oracle).unwrap() {
    ///     GuessOutcome::Solved(summary) => assert_eq!(summary.points_awarded, 100),
    ///     other => panic!("unexpected {other:?}"),
    /// }
    /// ```
    pub fn submit_guess<O>(&mut self, raw: &str, oracle: &O) -> Result<GuessOutcome, RoundError>
    where
        O: SimilarityOracle + ?Sized,
    {
        self.ensure_open()?;

        let guess = raw.trim().to_lowercase();
        if guess.is_empty() {
            return Err(RoundError::EmptyGuess);
        }
        if self.state.guessed.contains(&guess) {
            return Err(RoundError::DuplicateGuess(guess));
        }
        self.state.guessed.insert(guess.clone());

        if guess == self.state.secret {
            self.state.record(&guess, 1.0, EntrySource::Guess);

            let extra_guesses = u32::try_from(self.state.guesses().saturating_sub(1)).unwrap_or(u32::MAX);
            let guess_cost = self.rules.guess_penalty.saturating_mul(extra_guesses);
            self.state.points = self.state.points.saturating_sub(guess_cost);
            self.phase = RoundPhase::Solved;

            let summary = self.summary();
            info!(
                level = self.level,
                points = summary.points_awarded,
                guesses = summary.guesses,
                "round solved"
            );
            return Ok(GuessOutcome::Solved(summary));
        }

        let similarity = similarity_or_fallback(oracle, &self.state.secret, &guess);
        let improved = similarity > self.state.watermark;
        if improved {
            self.state.watermark = similarity;
        }
        debug!(guess = %guess, similarity, improved, "guess scored");

        // Near-perfect scores stay out of the history table
        if similarity > NEAR_PERFECT {
            return Ok(GuessOutcome::NearPerfect { word: guess });
        }
        self.state.record(&guess, similarity, EntrySource::Guess);

        Ok(GuessOutcome::Scored {
            word: guess,
            similarity,
            improved,
        })
    }

    /// Ask the hint engine for the next hint
    ///
    /// The corpus similarity table is computed on the first hint and reused
    /// afterwards. An issued hint raises the watermark and costs the hint
    /// penalty; `NoMoreHints` costs nothing.
    ///
    /// # Errors
    /// `RoundOver` once the round has ended.
    pub fn request_hint<O>(
        &mut self,
        engine: &mut HintEngine,
        oracle: &O,
        corpus: &[String],
    ) -> Result<HintOutcome, RoundError>
    where
        O: SimilarityOracle + ?Sized,
    {
        self.ensure_open()?;

        let table = self
            .table
            .get_or_insert_with(|| SimilarityTable::compute(&self.state.secret, corpus, oracle));

        let outcome = engine.select(
            table,
            self.state.watermark,
            self.state.hints_used(),
            &self.state.hints_given,
        );

        if let HintOutcome::Issued(hint) = &outcome {
            self.state.watermark = hint.similarity;
            self.state.hints_given.insert(hint.word.clone());
            self.state.points = self.state.points.saturating_sub(self.rules.hint_penalty);
            self.state.record(&hint.word, hint.similarity, EntrySource::Hint);
        }

        Ok(outcome)
    }

    /// Reveal one more leading letter of the secret
    ///
    /// At least [`MIN_CONCEALED`] letters always stay hidden; past that point
    /// the call is a no-op reporting `Unavailable`.
    ///
    /// # Errors
    /// `RoundOver` once the round has ended.
    pub fn reveal_letter(&mut self) -> Result<RevealOutcome, RoundError> {
        self.ensure_open()?;

        let limit = self
            .state
            .secret
            .chars()
            .count()
            .saturating_sub(MIN_CONCEALED);
        if self.state.letters_revealed >= limit {
            return Ok(RevealOutcome::Unavailable);
        }

        self.state.letters_revealed += 1;
        self.state.points = self
            .state
            .points
            .saturating_sub(self.rules.reveal_penalty);

        Ok(RevealOutcome::Revealed {
            pattern: mask(&self.state.secret, self.state.letters_revealed),
            revealed: self.state.letters_revealed,
        })
    }

    /// Give up; the round scores zero and the secret is disclosed
    ///
    /// # Errors
    /// `RoundOver` once the round has ended.
    pub fn forfeit(&mut self) -> Result<RoundSummary, RoundError> {
        self.ensure_open()?;

        self.state.points = 0;
        self.phase = RoundPhase::Forfeited;
        info!(level = self.level, secret = %self.state.secret, "round forfeited");

        Ok(self.summary())
    }

    /// Numbers so far; `points_awarded` is final only in a terminal phase
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            level: self.level,
            secret: self.state.secret.clone(),
            solved: self.phase == RoundPhase::Solved,
            points_awarded: self.state.points,
            max_points: self.rules.max_points,
            guesses: self.state.guesses(),
            hints: self.state.hints_used(),
            letters_revealed: self.state.letters_revealed,
        }
    }

    fn ensure_open(&self) -> Result<(), RoundError> {
        if self.is_over() {
            Err(RoundError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Reveal the first `revealed` letters and hide the rest: `ca_ _ _`
///
/// # Examples
/// ```
/// use search_party::session::mask;
///
/// assert_eq!(mask("camel", 2), "ca_ _ _");
/// assert_eq!(mask("cat", 0), "_ _ _");
/// ```
#[must_use]
pub fn mask(secret: &str, revealed: usize) -> String {
    let total = secret.chars().count();
    let shown: String = secret.chars().take(revealed).collect();
    let hidden = "_ ".repeat(total.saturating_sub(revealed));
    format!("{shown}{}", hidden.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(_: &str, b: &str) -> Option<f64> {
        match b {
            "kitten" => Some(0.8),
            "dog" => Some(0.5),
            "feline" => Some(0.99995),
            "rock" => Some(-0.3),
            "related" => Some(0.3),
            _ => None,
        }
    }

    fn corpus() -> Vec<String> {
        ["cat", "kitten", "dog", "related", "rock"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn exact_first_guess_scores_full_points() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        match round.submit_guess("cat", &oracle).unwrap() {
            GuessOutcome::Solved(summary) => {
                assert_eq!(summary.points_awarded, 100);
                assert_eq!(summary.guesses, 1);
                assert!(summary.solved);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(round.phase(), RoundPhase::Solved);
    }

    #[test]
    fn guess_is_normalized() {
        let mut round = RoundSession::new(1, "Cat", RoundRules::default());
        assert!(matches!(
            round.submit_guess("  CaT ", &oracle),
            Ok(GuessOutcome::Solved(_))
        ));
    }

    #[test]
    fn duplicate_guess_is_rejected_without_change() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        round.submit_guess("dog", &oracle).unwrap();
        let before = round.summary();

        for _ in 0..2 {
            assert_eq!(
                round.submit_guess("DOG", &oracle),
                Err(RoundError::DuplicateGuess("dog".to_string()))
            );
        }
        assert_eq!(round.summary(), before);
    }

    #[test]
    fn empty_guess_is_rejected() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        assert_eq!(round.submit_guess("   ", &oracle), Err(RoundError::EmptyGuess));
        assert_eq!(round.state().guesses(), 0);
    }

    #[test]
    fn watermark_tracks_best_guess() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());

        round.submit_guess("dog", &oracle).unwrap();
        assert!((round.state().watermark() - 0.5).abs() < 1e-12);

        let outcome = round.submit_guess("related", &oracle).unwrap();
        assert!(matches!(outcome, GuessOutcome::Scored { improved: false, .. }));
        assert!((round.state().watermark() - 0.5).abs() < 1e-12);

        // Negative and unknown words never lower it
        round.submit_guess("rock", &oracle).unwrap();
        round.submit_guess("qwzx", &oracle).unwrap();
        assert!((round.state().watermark() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn near_perfect_is_reported_distinctly() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        assert_eq!(
            round.submit_guess("feline", &oracle).unwrap(),
            GuessOutcome::NearPerfect {
                word: "feline".to_string()
            }
        );
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert!(round.state().history().is_empty());
        assert_eq!(round.state().guesses(), 1);
        assert!(round.state().watermark() > NEAR_PERFECT);
    }

    #[test]
    fn reveal_stops_two_letters_short() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());

        assert_eq!(
            round.reveal_letter().unwrap(),
            RevealOutcome::Revealed {
                pattern: "c_ _".to_string(),
                revealed: 1
            }
        );
        for _ in 0..3 {
            assert_eq!(round.reveal_letter().unwrap(), RevealOutcome::Unavailable);
        }
        assert_eq!(round.state().letters_revealed(), 1);
        assert_eq!(round.state().points(), 90);
    }

    #[test]
    fn short_secrets_never_reveal() {
        let mut round = RoundSession::new(1, "ox", RoundRules::default());
        assert_eq!(round.reveal_letter().unwrap(), RevealOutcome::Unavailable);
        assert_eq!(round.state().points(), 100);
    }

    #[test]
    fn penalties_floor_at_zero() {
        let rules = RoundRules {
            max_points: 15,
            ..RoundRules::default()
        };
        let mut round = RoundSession::new(1, "elephant", rules);
        for _ in 0..3 {
            round.reveal_letter().unwrap();
        }
        assert_eq!(round.state().points(), 0);

        match round.submit_guess("elephant", &oracle).unwrap() {
            GuessOutcome::Solved(summary) => assert_eq!(summary.points_awarded, 0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hint_raises_watermark_and_costs_points() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        let mut engine = HintEngine::seeded(4);

        round.submit_guess("related", &oracle).unwrap();
        let outcome = round.request_hint(&mut engine, &oracle, &corpus()).unwrap();

        let HintOutcome::Issued(hint) = outcome else {
            panic!("expected a hint");
        };
        assert_ne!(hint.word, "cat");
        assert!(hint.similarity > 0.3);
        assert!((round.state().watermark() - hint.similarity).abs() < 1e-12);
        assert_eq!(round.state().hints_used(), 1);
        assert_eq!(round.state().points(), 95);
        assert_eq!(round.state().history().last().unwrap().source, EntrySource::Hint);
    }

    #[test]
    fn exhausted_hints_cost_nothing() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        let mut engine = HintEngine::seeded(4);

        // kitten is the closest corpus word; after it nothing is left
        round.submit_guess("kitten", &oracle).unwrap();
        assert_eq!(
            round.request_hint(&mut engine, &oracle, &corpus()).unwrap(),
            HintOutcome::NoMoreHints
        );
        assert_eq!(round.state().points(), 100);
        assert_eq!(round.state().hints_used(), 0);
    }

    #[test]
    fn guess_penalty_applies_to_extra_guesses() {
        let rules = RoundRules {
            guess_penalty: 1,
            ..RoundRules::default()
        };
        let mut round = RoundSession::new(1, "cat", rules);
        round.submit_guess("dog", &oracle).unwrap();
        round.submit_guess("rock", &oracle).unwrap();

        match round.submit_guess("cat", &oracle).unwrap() {
            GuessOutcome::Solved(summary) => {
                assert_eq!(summary.guesses, 3);
                assert_eq!(summary.points_awarded, 98);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn forfeit_zeroes_points_and_ends_round() {
        let mut round = RoundSession::new(2, "cat", RoundRules::default());
        round.submit_guess("dog", &oracle).unwrap();

        let summary = round.forfeit().unwrap();
        assert_eq!(summary.points_awarded, 0);
        assert_eq!(summary.secret, "cat");
        assert!(!summary.solved);
        assert_eq!(round.phase(), RoundPhase::Forfeited);

        assert_eq!(round.submit_guess("cat", &oracle), Err(RoundError::RoundOver));
        assert_eq!(round.reveal_letter(), Err(RoundError::RoundOver));
        assert_eq!(round.forfeit(), Err(RoundError::RoundOver));
    }

    #[test]
    fn history_numbers_rows() {
        let mut round = RoundSession::new(1, "cat", RoundRules::default());
        round.submit_guess("dog", &oracle).unwrap();
        round.submit_guess("rock", &oracle).unwrap();

        let numbers: Vec<usize> = round.state().history().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn mask_counts_characters() {
        assert_eq!(mask("café", 3), "caf_");
        assert_eq!(mask("abc", 3), "abc");
    }
}
