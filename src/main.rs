//! Search Party - CLI
//!
//! Semantic word-guessing game with frequency-based difficulty levels.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;
use search_party::{
    commands::{
        PreparedVocabulary, build_level_report, clean_word_list, prepare_vocabulary, run_play,
    },
    config::{DEFAULT_NUM_LEVELS, GameConfig},
    output::{print_clean_report, print_level_report},
    session::GameSession,
    wordlists::{EmbeddingTable, FrequencyTable, load_words},
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, info, warn};

const DEFAULT_VECTORS: &str = "data/vectors.txt";

#[derive(Parser)]
#[command(
    name = "search_party",
    about = "Guess the secret word by meaning, level by level",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Word frequency file, `word<TAB>frequency` per line
    #[arg(short = 'f', long, global = true, default_value = "data/frequencies.tsv")]
    frequencies: PathBuf,

    /// Floor applied to every frequency lookup
    #[arg(long, global = true, default_value_t = 0.0)]
    min_frequency: f64,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play(PlayArgs),

    /// Show how the vocabulary splits into levels
    Levels {
        /// Number of difficulty levels
        #[arg(short = 'l', long, default_value_t = DEFAULT_NUM_LEVELS)]
        num_levels: usize,

        /// Words to list per level
        #[arg(short = 'n', long, default_value = "10")]
        sample: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clean a numbered raw list into a vocabulary file
    Clean {
        /// Raw list with a header line and `N.word` entries
        input: PathBuf,

        /// Where to write the cleaned list
        output: PathBuf,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Word vector file (GloVe / word2vec text format)
    #[arg(long, default_value = DEFAULT_VECTORS)]
    vectors: PathBuf,

    /// Only load vectors for vocabulary words
    #[arg(long)]
    vocabulary_vectors_only: bool,

    /// Emit events as JSON lines instead of colored text
    #[arg(long)]
    json: bool,

    /// Read game settings from a JSON file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    game: GameConfig,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            vectors: PathBuf::from(DEFAULT_VECTORS),
            vocabulary_vectors_only: false,
            json: false,
            config: None,
            game: GameConfig::default(),
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));

    match command {
        Commands::Play(args) => run_play_command(&cli, args),
        Commands::Levels {
            num_levels,
            sample,
            json,
        } => run_levels_command(&cli, num_levels, sample, json),
        Commands::Clean { input, output } => {
            let report = clean_word_list(&input, &output)
                .with_context(|| format!("cleaning {}", input.display()))?;
            print_clean_report(&report);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_vocabulary(cli: &Cli, num_levels: usize) -> Result<PreparedVocabulary> {
    let words = load_words(&cli.words)
        .with_context(|| format!("loading words from {}", cli.words.display()))?;
    let frequencies = FrequencyTable::load(&cli.frequencies)
        .with_context(|| format!("loading frequencies from {}", cli.frequencies.display()))?
        .with_minimum(cli.min_frequency);

    let missing = words
        .iter()
        .filter(|w| !frequencies.contains(w))
        .count();
    if missing > 0 {
        warn!(missing, "words without a frequency entry default to the minimum");
    }

    Ok(prepare_vocabulary(words, &frequencies, num_levels)?)
}

fn run_levels_command(cli: &Cli, num_levels: usize, sample: usize, json: bool) -> Result<()> {
    let prepared = load_vocabulary(cli, num_levels)?;
    let report = build_level_report(&prepared.tiers, sample);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_level_report(&report);
    }
    Ok(())
}

fn run_play_command(cli: &Cli, args: PlayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => args.game,
    };
    config.validate()?;

    let PreparedVocabulary { words, tiers } = load_vocabulary(cli, config.num_levels)?;
    let keep: Option<FxHashSet<String>> = args
        .vocabulary_vectors_only
        .then(|| words.iter().cloned().collect());
    let oracle = load_embeddings(&args.vectors, keep.as_ref(), args.json)?;
    info!(words = words.len(), vectors = oracle.len(), "starting game");

    let mut game = GameSession::new(config, tiers, words, oracle)?;
    run_play(&mut game, io::stdin().lock(), args.json)?;
    Ok(())
}

fn load_embeddings(
    path: &Path,
    keep: Option<&FxHashSet<String>>,
    quiet: bool,
) -> Result<EmbeddingTable> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .context("invalid progress template")?,
    );
    spinner.set_message(format!("Loading word vectors from {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let table = EmbeddingTable::load_filtered(path, keep)
        .with_context(|| format!("loading word vectors from {}", path.display()));
    spinner.finish_and_clear();

    let table = table?;
    if table.is_empty() {
        warn!("no word vectors loaded; every guess will score 0");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_takes_only_the_level_count() {
        let cli = Cli::try_parse_from(["search_party", "levels", "-l", "4", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Levels {
                num_levels: 4,
                sample: 10,
                json: true
            })
        ));

        for flag in ["--max-points", "--hint-penalty", "--seed"] {
            assert!(Cli::try_parse_from(["search_party", "levels", flag, "7"]).is_err());
        }
    }

    #[test]
    fn play_still_takes_game_flags() {
        let cli = Cli::try_parse_from(["search_party", "play", "--seed", "7", "--max-points", "50"])
            .unwrap();
        let Some(Commands::Play(args)) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.game.seed, Some(7));
        assert_eq!(args.game.max_points, 50);
    }
}
