//! Game sequencing
//!
//! One round per level, easiest first. Solving or forfeiting a round folds its
//! numbers into the totals and moves on to the next level; the game is
//! complete once the last level is done.

use super::events::GameEvent;
use super::round::{GuessOutcome, RevealOutcome, RoundRules, RoundSession, RoundSummary};
use crate::config::GameConfig;
use crate::core::SimilarityOracle;
use crate::error::{GameError, GameResult, RoundError};
use crate::hints::{HintEngine, HintOutcome};
use crate::leveling::LevelTiers;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

/// Running totals across rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameTotals {
    pub total_points: u64,
    pub max_possible_points: u64,
    pub total_guesses: usize,
    pub total_hints: usize,
    pub total_letters_revealed: usize,
    /// Rounds solved
    pub rounds_completed: usize,
    pub rounds_forfeited: usize,
    /// Level being played; `num_levels + 1` once the game is complete
    pub level: usize,
}

impl GameTotals {
    fn new(max_possible_points: u64) -> Self {
        Self {
            total_points: 0,
            max_possible_points,
            total_guesses: 0,
            total_hints: 0,
            total_letters_revealed: 0,
            rounds_completed: 0,
            rounds_forfeited: 0,
            level: 1,
        }
    }

    fn absorb(&mut self, summary: &RoundSummary) {
        self.total_points += u64::from(summary.points_awarded);
        self.total_guesses += summary.guesses;
        self.total_hints += summary.hints;
        self.total_letters_revealed += summary.letters_revealed;
        if summary.solved {
            self.rounds_completed += 1;
        } else {
            self.rounds_forfeited += 1;
        }
        self.level += 1;
    }
}

/// A full game over precomputed difficulty tiers
///
/// Owns the similarity oracle, the hint corpus and the only active round.
pub struct GameSession<O: SimilarityOracle> {
    config: GameConfig,
    tiers: LevelTiers,
    corpus: Vec<String>,
    oracle: O,
    hints: HintEngine,
    rng: StdRng,
    round: Option<RoundSession>,
    totals: GameTotals,
}

impl<O: SimilarityOracle> GameSession<O> {
    /// Set up a game and start the level 1 round
    ///
    /// # Errors
    /// `GameError::Config` if the configuration is invalid or disagrees with
    /// the tiers on the number of levels, `GameError::EmptyLevel` if a tier
    /// has no words.
    ///
    /// # Examples
    /// ```
    /// use search_party::config::GameConfig;
    /// use search_party::core::VocabularyEntry;
    /// use search_party::leveling::LevelTiers;
    /// use search_party::session::GameSession;
    ///
    /// let entries = [VocabularyEntry::new("cat", 0.5), VocabularyEntry::new("elephant", 0.001)];
    /// let config = GameConfig { num_levels: 2, seed: Some(1), ..GameConfig::default() };
    /// let tiers = LevelTiers::build(&entries, config.num_levels).unwrap();
    /// let corpus = vec!["cat".to_string(), "elephant".to_string()];
    ///
    /// let mut game = GameSession::new(config, tiers, corpus, |_: &str, _: &str| Some(0.1)).unwrap();
    /// assert_eq!(game.level(), 1);
    /// game.submit_guess("cat").unwrap();
    /// assert_eq!(game.level(), 2);
    /// ```
    pub fn new(
        config: GameConfig,
        tiers: LevelTiers,
        corpus: Vec<String>,
        oracle: O,
    ) -> GameResult<Self> {
        config.validate()?;
        if tiers.num_levels() != config.num_levels {
            return Err(GameError::Config(format!(
                "tiers have {} levels but the game is configured for {}",
                tiers.num_levels(),
                config.num_levels
            )));
        }
        tiers.validate()?;

        let (rng, hints) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                HintEngine::seeded(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), HintEngine::new()),
        };
        let totals = GameTotals::new(config.max_possible_points());

        let mut game = Self {
            config,
            tiers,
            corpus,
            oracle,
            hints,
            rng,
            round: None,
            totals,
        };
        game.start_round()?;
        Ok(game)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn tiers(&self) -> &LevelTiers {
        &self.tiers
    }

    #[must_use]
    pub const fn totals(&self) -> &GameTotals {
        &self.totals
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.totals.level
    }

    /// The active round, `None` once the game is complete
    #[must_use]
    pub const fn round(&self) -> Option<&RoundSession> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.totals.level > self.config.num_levels
    }

    /// The event announcing the active round, for front ends that start late
    #[must_use]
    pub fn round_started(&self) -> Option<GameEvent> {
        self.round.as_ref().map(|round| GameEvent::RoundStarted {
            level: round.level(),
            letters: round.state().secret().chars().count(),
        })
    }

    /// # Errors
    /// `RoundError::DuplicateGuess`/`EmptyGuess` (recoverable) or
    /// `RoundError::GameComplete` after the last level.
    pub fn submit_guess(&mut self, raw: &str) -> GameResult<Vec<GameEvent>> {
        let round = active(&mut self.round)?;

        match round.submit_guess(raw, &self.oracle)? {
            GuessOutcome::Scored {
                word,
                similarity,
                improved,
            } => Ok(vec![GameEvent::GuessScored {
                word,
                similarity,
                improved,
            }]),
            GuessOutcome::NearPerfect { word } => Ok(vec![GameEvent::NearPerfect { word }]),
            GuessOutcome::Solved(summary) => {
                let mut events = vec![GameEvent::RoundSolved(summary.clone())];
                self.finish_round(&summary, &mut events)?;
                Ok(events)
            }
        }
    }

    /// # Errors
    /// `RoundError::GameComplete` after the last level.
    pub fn request_hint(&mut self) -> GameResult<Vec<GameEvent>> {
        let round = active(&mut self.round)?;

        let event = match round.request_hint(&mut self.hints, &self.oracle, &self.corpus)? {
            HintOutcome::Issued(hint) => GameEvent::HintIssued(hint),
            HintOutcome::NoMoreHints => GameEvent::NoMoreHints,
        };
        Ok(vec![event])
    }

    /// # Errors
    /// `RoundError::GameComplete` after the last level.
    pub fn reveal_letter(&mut self) -> GameResult<Vec<GameEvent>> {
        let round = active(&mut self.round)?;

        let event = match round.reveal_letter()? {
            RevealOutcome::Revealed { pattern, revealed } => {
                GameEvent::LetterRevealed { pattern, revealed }
            }
            RevealOutcome::Unavailable => GameEvent::RevealUnavailable,
        };
        Ok(vec![event])
    }

    /// Give up the current round; the game still advances a level
    ///
    /// # Errors
    /// `RoundError::GameComplete` after the last level.
    pub fn forfeit(&mut self) -> GameResult<Vec<GameEvent>> {
        let round = active(&mut self.round)?;

        let summary = round.forfeit()?;
        let mut events = vec![GameEvent::Forfeited(summary.clone())];
        self.finish_round(&summary, &mut events)?;
        Ok(events)
    }

    /// Reset totals and go back to level 1, keeping the tiers
    ///
    /// # Errors
    /// Only if a new secret word cannot be drawn, which validated tiers rule out.
    pub fn restart(&mut self) -> GameResult<Vec<GameEvent>> {
        info!("game restarted");
        self.totals = GameTotals::new(self.config.max_possible_points());
        self.round = None;
        self.start_round()?;
        Ok(self.round_started().into_iter().collect())
    }

    fn finish_round(
        &mut self,
        summary: &RoundSummary,
        events: &mut Vec<GameEvent>,
    ) -> GameResult<()> {
        self.totals.absorb(summary);
        self.round = None;

        if self.is_complete() {
            info!(
                points = self.totals.total_points,
                solved = self.totals.rounds_completed,
                "game complete"
            );
            events.push(GameEvent::GameComplete(self.totals.clone()));
            return Ok(());
        }

        events.push(GameEvent::LevelAdvanced {
            level: self.totals.level,
        });
        self.start_round()?;
        events.extend(self.round_started());
        Ok(())
    }

    fn start_round(&mut self) -> GameResult<()> {
        let level = self.totals.level;
        let secret = self.tiers.choose_word(level, &mut self.rng)?;
        self.round = Some(RoundSession::new(level, secret, RoundRules::from(&self.config)));
        Ok(())
    }
}

fn active(round: &mut Option<RoundSession>) -> Result<&mut RoundSession, RoundError> {
    round.as_mut().ok_or(RoundError::GameComplete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VocabularyEntry;

    fn oracle(_: &str, b: &str) -> Option<f64> {
        match b {
            "kitten" => Some(0.7),
            "puppy" => Some(0.4),
            _ => Some(0.1),
        }
    }

    fn game(num_levels: usize) -> GameSession<fn(&str, &str) -> Option<f64>> {
        let entries = [
            VocabularyEntry::new("cat", 0.5),
            VocabularyEntry::new("dog", 0.4),
            VocabularyEntry::new("kitten", 0.01),
            VocabularyEntry::new("puppy", 0.02),
        ];
        let config = GameConfig {
            num_levels,
            seed: Some(21),
            ..GameConfig::default()
        };
        let tiers = LevelTiers::build(&entries, num_levels).unwrap();
        let corpus = entries.iter().map(|e| e.word().to_string()).collect();
        GameSession::new(config, tiers, corpus, oracle as fn(&str, &str) -> Option<f64>).unwrap()
    }

    fn secret<O: SimilarityOracle>(game: &GameSession<O>) -> String {
        game.round().unwrap().state().secret().to_string()
    }

    #[test]
    fn starts_at_level_one() {
        let game = game(2);
        assert_eq!(game.level(), 1);
        assert!(!game.is_complete());
        assert!(matches!(
            game.round_started(),
            Some(GameEvent::RoundStarted { level: 1, .. })
        ));
    }

    #[test]
    fn solving_advances_and_accumulates() {
        let mut game = game(2);
        let word = secret(&game);

        let events = game.submit_guess(&word).unwrap();
        assert!(matches!(events[0], GameEvent::RoundSolved(_)));
        assert_eq!(events[1], GameEvent::LevelAdvanced { level: 2 });
        assert!(matches!(events[2], GameEvent::RoundStarted { level: 2, .. }));

        assert_eq!(game.totals().total_points, 100);
        assert_eq!(game.totals().rounds_completed, 1);
        assert_eq!(game.totals().total_guesses, 1);
    }

    #[test]
    fn forfeit_still_advances_level() {
        let mut game = game(2);
        let events = game.forfeit().unwrap();

        assert!(matches!(&events[0], GameEvent::Forfeited(s) if s.points_awarded == 0));
        assert_eq!(game.level(), 2);
        assert_eq!(game.totals().rounds_forfeited, 1);
        assert_eq!(game.totals().total_points, 0);
    }

    #[test]
    fn completes_after_last_level() {
        let mut game = game(2);
        game.forfeit().unwrap();
        let word = secret(&game);
        let events = game.submit_guess(&word).unwrap();

        assert!(game.is_complete());
        assert!(game.round().is_none());
        match events.last().unwrap() {
            GameEvent::GameComplete(totals) => {
                assert_eq!(totals.total_points, 100);
                assert_eq!(totals.max_possible_points, 200);
                assert_eq!(totals.rounds_completed, 1);
                assert_eq!(totals.rounds_forfeited, 1);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            game.submit_guess("cat"),
            Err(GameError::Round(RoundError::GameComplete))
        ));
        assert!(matches!(
            game.request_hint(),
            Err(GameError::Round(RoundError::GameComplete))
        ));
    }

    #[test]
    fn restart_resets_totals_keeps_tiers() {
        let mut game = game(2);
        let tiers_before = game.tiers().clone();
        game.forfeit().unwrap();
        game.forfeit().unwrap();
        assert!(game.is_complete());

        let events = game.restart().unwrap();
        assert!(matches!(events[0], GameEvent::RoundStarted { level: 1, .. }));
        assert_eq!(game.level(), 1);
        assert_eq!(game.totals().rounds_forfeited, 0);
        assert_eq!(game.tiers(), &tiers_before);
    }

    #[test]
    fn duplicate_guess_is_recoverable() {
        let mut game = game(2);
        game.submit_guess("zzz").unwrap();
        let err = game.submit_guess("zzz").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(game.level(), 1);
    }

    #[test]
    fn hints_and_reveals_flow_through() {
        let mut game = game(1);
        let events = game.reveal_letter().unwrap();
        assert!(matches!(events[0], GameEvent::LetterRevealed { revealed: 1, .. }));

        let events = game.request_hint().unwrap();
        assert!(matches!(
            events[0],
            GameEvent::HintIssued(_) | GameEvent::NoMoreHints
        ));
    }

    #[test]
    fn mismatched_level_count_is_config_error() {
        let entries = [VocabularyEntry::new("cat", 0.5), VocabularyEntry::new("dog", 0.4)];
        let tiers = LevelTiers::build(&entries, 2).unwrap();
        let config = GameConfig {
            num_levels: 1,
            ..GameConfig::default()
        };
        let result = GameSession::new(
            config,
            tiers,
            Vec::new(),
            oracle as fn(&str, &str) -> Option<f64>,
        );
        assert!(matches!(result, Err(GameError::Config(_))));
    }
}
