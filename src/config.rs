//! Game configuration
//!
//! Parsed from CLI flags (flattened into subcommands) or read from a JSON file.
//! Missing JSON fields take the defaults below.

use crate::error::{GameError, GameResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_NUM_LEVELS: usize = 3;
pub const DEFAULT_MAX_POINTS: u32 = 100;
pub const DEFAULT_HINT_PENALTY: u32 = 5;
pub const DEFAULT_REVEAL_PENALTY: u32 = 10;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of difficulty levels (one round per level)
    #[arg(short = 'l', long, default_value_t = DEFAULT_NUM_LEVELS)]
    pub num_levels: usize,

    /// Points available in each round
    #[arg(long, default_value_t = DEFAULT_MAX_POINTS)]
    pub max_points: u32,

    /// Points deducted per hint
    #[arg(long, default_value_t = DEFAULT_HINT_PENALTY)]
    pub hint_penalty: u32,

    /// Points deducted per revealed letter
    #[arg(long, default_value_t = DEFAULT_REVEAL_PENALTY)]
    pub reveal_penalty: u32,

    /// Points deducted on a solve for every guess after the first
    #[arg(long, default_value_t = 0)]
    pub guess_penalty: u32,

    /// Seed for word and hint selection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_levels: DEFAULT_NUM_LEVELS,
            max_points: DEFAULT_MAX_POINTS,
            hint_penalty: DEFAULT_HINT_PENALTY,
            reveal_penalty: DEFAULT_REVEAL_PENALTY,
            guess_penalty: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a configuration from a JSON file
    ///
    /// # Errors
    /// I/O and JSON errors, plus anything [`GameConfig::validate`] rejects.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `GameError::Config` if `num_levels` is zero.
    pub fn validate(&self) -> GameResult<()> {
        if self.num_levels == 0 {
            return Err(GameError::Config(
                "number of levels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Best achievable game score
    #[must_use]
    pub fn max_possible_points(&self) -> u64 {
        u64::from(self.max_points) * self.num_levels as u64
    }
}
