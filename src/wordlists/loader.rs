//! Word list loading utilities
//!
//! Reads one-word-per-line vocabularies and cleans the raw numbered lists they
//! are produced from.

use crate::error::GameResult;
use rustc_hash::FxHashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Load a word list from a file
///
/// Blank lines are skipped, words are lowercased and duplicates dropped
/// (first occurrence wins).
///
/// # Errors
///
/// Returns `GameError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use search_party::wordlists::loader::load_words;
///
/// let words = load_words("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> GameResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse a one-word-per-line list
///
/// # Examples
/// ```
/// use search_party::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("Cat\n\ndog\ncat\n");
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    dedup(content.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Clean a raw numbered list such as
///
/// ```text
/// Rank.Word
/// 1.the
/// 2.of
/// ```
///
/// The header line is dropped, `N.` prefixes are stripped and duplicates are
/// removed keeping the first occurrence.
#[must_use]
pub fn clean_numbered_list(content: &str) -> Vec<String> {
    dedup(
        content
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(strip_rank),
    )
}

/// Write words one per line
///
/// # Errors
///
/// Returns `GameError::Io` if the file cannot be created or written.
pub fn save_words<P: AsRef<Path>>(path: P, words: &[String]) -> GameResult<()> {
    let mut file = fs::File::create(path)?;
    for word in words {
        writeln!(file, "{word}")?;
    }
    Ok(())
}

fn strip_rank(line: &str) -> &str {
    match line.split_once('.') {
        Some((rank, word)) if !rank.is_empty() && rank.chars().all(|c| c.is_ascii_digit()) => {
            word.trim()
        }
        _ => line,
    }
}

fn dedup<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    lines
        .map(str::to_lowercase)
        .filter(|word| !word.is_empty() && seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_skips_blanks_and_duplicates() {
        let words = words_from_lines("  apple \nBanana\n\napple\nbanana\ncherry");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
        assert!(words_from_lines("\n \n").is_empty());
    }

    #[test]
    fn clean_numbered_list_strips_header_and_ranks() {
        let raw = "Rank.Word\n1.the\n2.of\n3.The\n4.and\n";
        assert_eq!(clean_numbered_list(raw), vec!["the", "of", "and"]);
    }

    #[test]
    fn clean_numbered_list_keeps_unnumbered_lines() {
        let raw = "header\nplain\nmr.smith\n12.word\n";
        assert_eq!(clean_numbered_list(raw), vec!["plain", "mr.smith", "word"]);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        let words = vec!["cat".to_string(), "dog".to_string()];
        save_words(&path, &words).unwrap();
        assert_eq!(load_words(&path).unwrap(), words);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_words(dir.path().join("missing.txt")).is_err());
    }
}
