//! Rounds and games
//!
//! Commands go in (`submit_guess`, `request_hint`, `reveal_letter`, `forfeit`,
//! `restart`), [`GameEvent`]s come out.

mod events;
mod game;
mod round;

pub use events::GameEvent;
pub use game::{GameSession, GameTotals};
pub use round::{
    EntrySource, GuessOutcome, HistoryEntry, MIN_CONCEALED, NEAR_PERFECT, RevealOutcome,
    RoundPhase, RoundRules, RoundSession, RoundState, RoundSummary, mask,
};
