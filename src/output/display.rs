//! Display functions for game events and reports

use super::formatters::{SimilarityBand, format_similarity, similarity_bar};
use crate::commands::{CleanReport, LevelReport};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::hints::HintKind;
use crate::session::{EntrySource, GameEvent, GameTotals, HistoryEntry, RoundSummary};
use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

fn banded(text: &str, similarity: f64) -> ColoredString {
    match SimilarityBand::of(similarity) {
        SimilarityBand::Cold => text.red(),
        SimilarityBand::Warm => text.yellow(),
        SimilarityBand::Hot => text.green(),
    }
}

/// Print the welcome banner and the rules in force
pub fn print_banner(config: &GameConfig) {
    println!("\n{}", "═".repeat(RULE_WIDTH).bright_cyan());
    println!(" {}", "SEARCH PARTY".bright_cyan().bold());
    println!("{}", "═".repeat(RULE_WIDTH).bright_cyan());
    println!("\nFind the secret word. Every guess tells you how close it is in meaning.");
    println!(
        "{} levels, {} points each. Hints cost {}, revealed letters cost {}.",
        config.num_levels, config.max_points, config.hint_penalty, config.reveal_penalty
    );
    println!("Type {} for commands.\n", ":help".bright_white().bold());
}

pub fn print_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  <word>      guess a word");
    println!("  :hint       show a word closer than your best so far");
    println!("  :reveal     reveal the next letter of the secret");
    println!("  :history    list this round's guesses, closest first");
    println!("  :forfeit    give up this round and move on");
    println!("  :restart    start over from level 1");
    println!("  :quit       leave the game\n");
}

/// Print one event
pub fn print_event(event: &GameEvent) {
    match event {
        GameEvent::RoundStarted { level, letters } => {
            println!("{}", "─".repeat(RULE_WIDTH).cyan());
            println!(
                "Level {}: the secret word has {} letters",
                level.to_string().bright_yellow().bold(),
                letters
            );
            println!("{}", "─".repeat(RULE_WIDTH).cyan());
        }
        GameEvent::GuessScored {
            word,
            similarity,
            improved,
        } => {
            let marker = if *improved { " ▲ new best".bright_green() } else { "".normal() };
            println!(
                "  {:<16} [{}] {}{}",
                word.bright_white(),
                banded(&similarity_bar(*similarity, BAR_WIDTH), *similarity),
                banded(&format_similarity(*similarity), *similarity),
                marker
            );
        }
        GameEvent::NearPerfect { word } => {
            println!(
                "  {} is practically the same word. So close, but not it!",
                word.bright_yellow().bold()
            );
        }
        GameEvent::RoundSolved(summary) => print_round_summary(summary),
        GameEvent::HintIssued(hint) => {
            let label = match hint.kind {
                HintKind::Window => "Hint",
                HintKind::Closest => "Closest Word",
            };
            println!(
                "  💡 {}: {} ({})",
                label,
                hint.word.bright_white().bold(),
                banded(&format_similarity(hint.similarity), hint.similarity)
            );
        }
        GameEvent::NoMoreHints => println!("  No more hints available."),
        GameEvent::LetterRevealed { pattern, .. } => {
            println!("  🔤 {}", pattern.bright_white().bold());
        }
        GameEvent::RevealUnavailable => println!("  No more letters can be revealed."),
        GameEvent::Forfeited(summary) => print_round_summary(summary),
        GameEvent::LevelAdvanced { level } => {
            println!("\n{}", format!("Advancing to level {level}...").bright_cyan());
        }
        GameEvent::GameComplete(totals) => print_totals(totals),
    }
}

/// Print events as JSON lines
///
/// # Errors
/// `GameError::Json` if an event cannot be serialized.
pub fn print_events_json(events: &[GameEvent]) -> GameResult<()> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

/// Report a recoverable error to the player
pub fn print_error(error: &GameError, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "event": "error", "message": error.to_string() }));
    } else {
        println!("  {} {}", "❌".red(), error.to_string().red());
    }
}

pub fn print_round_summary(summary: &RoundSummary) {
    println!();
    if summary.solved {
        println!(
            "{}",
            format!("🎉 You found '{}'!", summary.secret).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("The word was '{}'.", summary.secret).yellow().bold()
        );
    }
    println!(
        "   Points:   {}/{}",
        summary.points_awarded.to_string().bright_yellow().bold(),
        summary.max_points
    );
    println!("   Guesses:  {}", summary.guesses);
    println!("   Hints:    {}", summary.hints);
    println!("   Letters:  {}", summary.letters_revealed);
}

pub fn print_totals(totals: &GameTotals) {
    println!("\n{}", "═".repeat(RULE_WIDTH).bright_cyan());
    println!(" {} ", "GAME COMPLETE".bright_cyan().bold());
    println!("{}", "═".repeat(RULE_WIDTH).bright_cyan());
    println!(
        "\n   Score:           {}",
        format!("{}/{}", totals.total_points, totals.max_possible_points)
            .bright_yellow()
            .bold()
    );
    println!("   Rounds solved:   {}", totals.rounds_completed.to_string().green());
    println!("   Rounds forfeited: {}", totals.rounds_forfeited.to_string().red());
    println!("   Guesses:         {}", totals.total_guesses);
    println!("   Hints:           {}", totals.total_hints);
    println!("   Letters:         {}", totals.total_letters_revealed);
    println!("\nType {} to play again or {} to leave.\n", ":restart".bold(), ":quit".bold());
}

/// Print a round's history, closest first
pub fn print_history(history: &[HistoryEntry]) {
    if history.is_empty() {
        println!("  Nothing guessed yet.");
        return;
    }

    let mut rows: Vec<&HistoryEntry> = history.iter().collect();
    rows.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    println!("\n  {:>3}  {:<16} {:>8}", "#", "Word", "Score");
    for entry in rows {
        let word = match entry.source {
            EntrySource::Guess => entry.word.normal(),
            EntrySource::Hint => format!("{} (hint)", entry.word).italic(),
        };
        println!(
            "  {:>3}  {:<16} {:>8}",
            entry.number.to_string().bright_black(),
            word,
            banded(&format_similarity(entry.similarity), entry.similarity)
        );
    }
    println!();
}

pub fn print_level_report(report: &LevelReport) {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());
    println!(
        " {} {} words ",
        "DIFFICULTY LEVELS:".bright_cyan().bold(),
        report.total_words
    );
    println!("{}", "═".repeat(RULE_WIDTH).cyan());

    for tier in &report.levels {
        println!(
            "\n📊 Level {} ({} words)",
            tier.level.to_string().bright_yellow().bold(),
            tier.words
        );
        if !tier.sample.is_empty() {
            println!("   {}", tier.sample.join(", "));
        }
    }
    println!();
}

pub fn print_clean_report(report: &CleanReport) {
    println!(
        "{}",
        format!("✅ Kept {} of {} entries", report.kept, report.input_entries)
            .green()
            .bold()
    );
    if report.removed > 0 {
        println!("   Removed {} duplicate or empty entries", report.removed);
    }
}
