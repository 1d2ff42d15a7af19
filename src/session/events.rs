//! Presentation boundary
//!
//! Every player command yields a list of events. Front ends render them; the
//! core never formats display strings except the letter-reveal mask.

use super::game::GameTotals;
use super::round::RoundSummary;
use crate::hints::Hint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        level: usize,
        letters: usize,
    },
    GuessScored {
        word: String,
        similarity: f64,
        improved: bool,
    },
    NearPerfect {
        word: String,
    },
    RoundSolved(RoundSummary),
    HintIssued(Hint),
    NoMoreHints,
    LetterRevealed {
        pattern: String,
        revealed: usize,
    },
    RevealUnavailable,
    Forfeited(RoundSummary),
    LevelAdvanced {
        level: usize,
    },
    GameComplete(GameTotals),
}
