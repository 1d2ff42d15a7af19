//! Difficulty leveling pipeline
//!
//! word list → [`normalize`] → [`score`] → [`bin`] → [`LevelTiers`]

mod binner;
mod difficulty;
mod normalizer;

pub use binner::{LevelTiers, bin};
pub use difficulty::score;
pub use normalizer::normalize;
