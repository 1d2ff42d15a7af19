//! Command implementations

pub mod clean;
pub mod levels;
pub mod play;

pub use clean::{CleanReport, clean_word_list};
pub use levels::{LevelReport, PreparedVocabulary, TierReport, build_level_report, prepare_vocabulary};
pub use play::{PlayerCommand, apply, parse_command, run_play};
