//! Line-oriented play loop
//!
//! Anything typed is a guess unless it starts with `:`, which keeps commands
//! from colliding with vocabulary words such as "hint" or "quit".

use crate::core::SimilarityOracle;
use crate::error::GameResult;
use crate::output::{
    print_banner, print_error, print_event, print_events_json, print_help, print_history,
};
use crate::session::{GameEvent, GameSession};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Guess(String),
    Hint,
    Reveal,
    Forfeit,
    Restart,
    History,
    Help,
    Quit,
    /// A `:` command nobody recognizes
    Unknown(String),
}

/// Interpret one line of input
///
/// # Examples
/// ```
/// use search_party::commands::{PlayerCommand, parse_command};
///
/// assert_eq!(parse_command("  Kitten "), PlayerCommand::Guess("Kitten".to_string()));
/// assert_eq!(parse_command(":hint"), PlayerCommand::Hint);
/// assert_eq!(parse_command(":q"), PlayerCommand::Quit);
/// ```
#[must_use]
pub fn parse_command(input: &str) -> PlayerCommand {
    let input = input.trim();
    let Some(command) = input.strip_prefix(':') else {
        return PlayerCommand::Guess(input.to_string());
    };

    match command.trim().to_lowercase().as_str() {
        "hint" | "h" => PlayerCommand::Hint,
        "reveal" | "r" => PlayerCommand::Reveal,
        "forfeit" | "f" | "giveup" => PlayerCommand::Forfeit,
        "restart" | "new" | "n" => PlayerCommand::Restart,
        "history" | "l" => PlayerCommand::History,
        "help" | "?" => PlayerCommand::Help,
        "quit" | "q" | "exit" => PlayerCommand::Quit,
        other => PlayerCommand::Unknown(other.to_string()),
    }
}

/// Apply a game-changing command
///
/// Commands that only affect the terminal (`History`, `Help`, `Quit`,
/// `Unknown`) produce no events.
///
/// # Errors
/// Whatever the session reports; `RoundError`s are recoverable.
pub fn apply<O: SimilarityOracle>(
    game: &mut GameSession<O>,
    command: &PlayerCommand,
) -> GameResult<Vec<GameEvent>> {
    match command {
        PlayerCommand::Guess(word) => game.submit_guess(word),
        PlayerCommand::Hint => game.request_hint(),
        PlayerCommand::Reveal => game.reveal_letter(),
        PlayerCommand::Forfeit => game.forfeit(),
        PlayerCommand::Restart => game.restart(),
        PlayerCommand::History
        | PlayerCommand::Help
        | PlayerCommand::Quit
        | PlayerCommand::Unknown(_) => Ok(Vec::new()),
    }
}

/// Run the interactive game until `:quit` or end of input
///
/// With `json` set, every event is printed as one JSON object per line and
/// no banner or prompt is shown.
///
/// # Errors
/// I/O errors on the input or output streams and non-recoverable game errors.
pub fn run_play<O, R>(game: &mut GameSession<O>, input: R, json: bool) -> GameResult<()>
where
    O: SimilarityOracle,
    R: BufRead,
{
    let started: Vec<GameEvent> = game.round_started().into_iter().collect();
    if json {
        print_events_json(&started)?;
    } else {
        print_banner(game.config());
        started.iter().for_each(print_event);
    }
    prompt(json)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(json)?;
            continue;
        }

        let command = parse_command(&line);
        match &command {
            PlayerCommand::Quit => break,
            PlayerCommand::Help if !json => print_help(),
            PlayerCommand::History if !json => {
                if let Some(round) = game.round() {
                    print_history(round.state().history());
                }
            }
            PlayerCommand::Unknown(name) if !json => {
                println!("Unknown command ':{name}' (type :help)");
            }
            _ => {}
        }

        match apply(game, &command) {
            Ok(events) if json => print_events_json(&events)?,
            Ok(events) => events.iter().for_each(print_event),
            Err(e) if e.is_recoverable() => print_error(&e, json),
            Err(e) => return Err(e),
        }

        prompt(json)?;
    }

    if !json {
        println!("\n👋 Thanks for playing!\n");
    }
    Ok(())
}

fn prompt(json: bool) -> io::Result<()> {
    if !json {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::VocabularyEntry;
    use crate::error::{GameError, RoundError};
    use crate::leveling::LevelTiers;

    #[test]
    fn plain_text_is_a_guess() {
        assert_eq!(parse_command("hint"), PlayerCommand::Guess("hint".to_string()));
        assert_eq!(parse_command(" cat\n"), PlayerCommand::Guess("cat".to_string()));
    }

    #[test]
    fn colon_commands_and_aliases() {
        assert_eq!(parse_command(":HINT"), PlayerCommand::Hint);
        assert_eq!(parse_command(": reveal"), PlayerCommand::Reveal);
        assert_eq!(parse_command(":giveup"), PlayerCommand::Forfeit);
        assert_eq!(parse_command(":new"), PlayerCommand::Restart);
        assert_eq!(parse_command(":history"), PlayerCommand::History);
        assert_eq!(parse_command(":?"), PlayerCommand::Help);
        assert_eq!(parse_command(":exit"), PlayerCommand::Quit);
        assert_eq!(
            parse_command(":dance"),
            PlayerCommand::Unknown("dance".to_string())
        );
    }

    fn oracle(_: &str, _: &str) -> Option<f64> {
        Some(0.2)
    }

    fn game() -> GameSession<fn(&str, &str) -> Option<f64>> {
        let entries = [VocabularyEntry::new("cat", 0.5), VocabularyEntry::new("dog", 0.4)];
        let config = GameConfig {
            num_levels: 1,
            seed: Some(3),
            ..GameConfig::default()
        };
        let tiers = LevelTiers::build(&entries, 1).unwrap();
        let corpus = vec!["cat".to_string(), "dog".to_string()];
        GameSession::new(config, tiers, corpus, oracle as fn(&str, &str) -> Option<f64>).unwrap()
    }

    #[test]
    fn apply_routes_to_the_session() {
        let mut game = game();
        let secret = game.round().unwrap().state().secret().to_string();

        let events = apply(&mut game, &PlayerCommand::Reveal).unwrap();
        assert!(matches!(events[0], GameEvent::LetterRevealed { revealed: 1, .. }));
        let events = apply(&mut game, &PlayerCommand::Reveal).unwrap();
        assert!(matches!(events[0], GameEvent::RevealUnavailable));

        let events = apply(&mut game, &PlayerCommand::Guess(secret)).unwrap();
        assert!(matches!(events[0], GameEvent::RoundSolved(_)));
        assert!(matches!(events.last(), Some(GameEvent::GameComplete(_))));

        let err = apply(&mut game, &PlayerCommand::Hint).unwrap_err();
        assert!(matches!(err, GameError::Round(RoundError::GameComplete)));
    }

    #[test]
    fn terminal_only_commands_have_no_events() {
        let mut game = game();
        assert!(apply(&mut game, &PlayerCommand::Help).unwrap().is_empty());
        assert!(apply(&mut game, &PlayerCommand::History).unwrap().is_empty());
        assert_eq!(game.round().unwrap().state().guesses(), 0);
    }

    #[test]
    fn run_play_stops_at_quit() {
        let mut game = game();
        let input = io::Cursor::new("zebra\n:quit\ncat\ndog\n");
        run_play(&mut game, input, true).unwrap();

        let state = game.round().unwrap().state();
        assert_eq!(state.guesses(), 1);
        assert!(state.has_guessed("zebra"));
    }
}
