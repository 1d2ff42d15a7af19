//! Word frequency table
//!
//! Stands in for a corpus frequency service. One file holds one language and
//! corpus variant, as `word<TAB>frequency` lines; `#` starts a comment.

use crate::core::FrequencyOracle;
use crate::error::{GameError, GameResult};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    frequencies: FxHashMap<String, f64>,
    minimum: f64,
}

impl FrequencyTable {
    /// # Errors
    /// `GameError::Io` if the file cannot be read, `GameError::Malformed` for
    /// bad lines.
    pub fn load<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let table = Self::from_tsv(&fs::read_to_string(path)?)?;
        info!(words = table.len(), "frequency table loaded");
        Ok(table)
    }

    /// Parse `word<whitespace>frequency` lines
    ///
    /// # Errors
    /// `GameError::Malformed` for a missing, unparsable or negative frequency.
    ///
    /// # Examples
    /// ```
    /// use search_party::core::FrequencyOracle;
    /// use search_party::wordlists::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_tsv("cat\t0.5\nelephant\t0.001\n").unwrap();
    /// assert!((table.frequency("cat") - 0.5).abs() < 1e-12);
    /// assert_eq!(table.frequency("unicorn"), 0.0);
    /// ```
    pub fn from_tsv(content: &str) -> GameResult<Self> {
        let mut frequencies = FxHashMap::default();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| GameError::Malformed {
                line: idx + 1,
                reason: reason.to_string(),
            };

            let mut parts = line.split_whitespace();
            let word = parts.next().ok_or_else(|| malformed("missing word"))?;
            let value: f64 = parts
                .next()
                .ok_or_else(|| malformed("missing frequency"))?
                .parse()
                .map_err(|_| malformed("frequency is not a number"))?;

            if !value.is_finite() || value < 0.0 {
                return Err(malformed("frequency must be a finite value >= 0"));
            }

            frequencies.insert(word.to_lowercase(), value);
        }

        Ok(Self {
            frequencies,
            minimum: 0.0,
        })
    }

    /// Floor applied to every lookup, unknown words included
    #[must_use]
    pub const fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Whether the table has an entry for `word`, floor aside
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl FrequencyOracle for FrequencyTable {
    fn frequency(&self, word: &str) -> f64 {
        self.frequencies
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0.0)
            .max(self.minimum)
    }
}

impl FromIterator<(String, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            frequencies: iter
                .into_iter()
                .map(|(word, f)| (word.to_lowercase(), f.max(0.0)))
                .collect(),
            minimum: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tabs_spaces_and_comments() {
        let table = FrequencyTable::from_tsv("# word freq\nCat 0.5\n\ndog\t1e-3\n").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("CAT"));
        assert!(!table.contains("word"));
        assert!((table.frequency("cat") - 0.5).abs() < 1e-12);
        assert!((table.frequency("DOG") - 0.001).abs() < 1e-12);
    }

    #[test]
    fn reports_bad_line_numbers() {
        let err = FrequencyTable::from_tsv("cat 0.5\ndog\n").unwrap_err();
        assert!(matches!(err, GameError::Malformed { line: 2, .. }));

        let err = FrequencyTable::from_tsv("cat lots\n").unwrap_err();
        assert!(matches!(err, GameError::Malformed { line: 1, .. }));

        let err = FrequencyTable::from_tsv("cat -1\n").unwrap_err();
        assert!(matches!(err, GameError::Malformed { line: 1, .. }));
    }

    #[test]
    fn minimum_floors_lookups() {
        let table = FrequencyTable::from_tsv("cat 0.5\nrare 0.00001\n")
            .unwrap()
            .with_minimum(0.001);
        assert!((table.frequency("rare") - 0.001).abs() < 1e-12);
        assert!((table.frequency("unknown") - 0.001).abs() < 1e-12);
        assert!((table.frequency("cat") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn collects_from_pairs() {
        let table: FrequencyTable = vec![("Cat".to_string(), 0.5)].into_iter().collect();
        assert!((table.frequency("cat") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.tsv");
        std::fs::write(&path, "cat\t0.5\n").unwrap();
        assert_eq!(FrequencyTable::load(&path).unwrap().len(), 1);
    }
}
