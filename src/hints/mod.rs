//! Hint ranking
//!
//! Picks progressively closer words from the corpus without giving the answer
//! away.

mod engine;
mod table;

pub use engine::{Hint, HintEngine, HintKind, HintOutcome, WIDEN_STEP, WINDOW_STEP};
pub use table::SimilarityTable;
