//! Raw list cleaning

use crate::error::GameResult;
use crate::wordlists::{clean_numbered_list, save_words};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Non-blank lines after the header
    pub input_entries: usize,
    pub kept: usize,
    /// Duplicates and entries left empty after stripping the rank
    pub removed: usize,
}

/// Turn a numbered raw list into a one-word-per-line vocabulary
///
/// # Errors
/// `GameError::Io` if the input cannot be read or the output written.
pub fn clean_word_list<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> GameResult<CleanReport> {
    let content = fs::read_to_string(input)?;
    let input_entries = content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count();

    let words = clean_numbered_list(&content);
    save_words(output, &words)?;

    let report = CleanReport {
        input_entries,
        kept: words.len(),
        removed: input_entries - words.len(),
    };
    info!(kept = report.kept, removed = report.removed, "word list cleaned");
    Ok(report)
}
