//! Search Party
//!
//! A word-guessing game played on meaning: the player hunts for a secret word
//! and every guess is scored by its semantic similarity to the secret. Words are
//! split into difficulty levels by corpus frequency and length, and hints walk
//! the player towards the answer without giving it away.
//!
//! # Quick Start
//!
//! ```rust
//! use search_party::config::GameConfig;
//! use search_party::core::VocabularyEntry;
//! use search_party::leveling::LevelTiers;
//! use search_party::session::{GameEvent, GameSession};
//!
//! let entries = [VocabularyEntry::new("cat", 0.5), VocabularyEntry::new("elephant", 0.001)];
//! let config = GameConfig { num_levels: 2, seed: Some(7), ..GameConfig::default() };
//! let tiers = LevelTiers::build(&entries, config.num_levels).unwrap();
//! let corpus = vec!["cat".to_string(), "elephant".to_string()];
//! let oracle = |_: &str, _: &str| Some(0.25);
//!
//! let mut game = GameSession::new(config, tiers, corpus, oracle).unwrap();
//! let events = game.submit_guess("cat").unwrap();
//! assert!(matches!(events[0], GameEvent::RoundSolved(_)));
//! ```

// Configuration
pub mod config;

// Core domain types
pub mod core;

// Error types
pub mod error;

// Hint selection
pub mod hints;

// Difficulty levels
pub mod leveling;

// Rounds and games
pub mod session;

// Word lists and collaborator tables
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
