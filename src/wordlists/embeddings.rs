//! Word vector table
//!
//! Reads GloVe / word2vec text files (`word v1 v2 ...` per line, optional
//! `count dims` header) and scores pairs by cosine similarity.

use crate::core::SimilarityOracle;
use crate::error::{GameError, GameResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    vectors: FxHashMap<String, Vec<f32>>,
    dims: usize,
}

impl EmbeddingTable {
    /// Load every vector in the file
    ///
    /// # Errors
    /// `GameError::Io` on read failure, `GameError::Malformed` for bad lines.
    pub fn load<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        Self::load_filtered(path, None)
    }

    /// Load only vectors whose word is in `keep`
    ///
    /// # Errors
    /// `GameError::Io` on read failure, `GameError::Malformed` for bad lines.
    pub fn load_filtered<P: AsRef<Path>>(
        path: P,
        keep: Option<&FxHashSet<String>>,
    ) -> GameResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut table = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            table.push_line(idx + 1, &line?, keep)?;
        }

        info!(words = table.len(), dims = table.dims, "embeddings loaded");
        Ok(table)
    }

    /// Parse vectors from in-memory text
    ///
    /// # Errors
    /// `GameError::Malformed` for non-numeric components or inconsistent
    /// dimensions.
    ///
    /// # Examples
    /// ```
    /// use search_party::core::SimilarityOracle;
    /// use search_party::wordlists::EmbeddingTable;
    ///
    /// let table = EmbeddingTable::from_text("cat 1 0\nkitten 1 0\ncar 0 1\n").unwrap();
    /// assert!((table.similarity("cat", "kitten").unwrap() - 1.0).abs() < 1e-9);
    /// assert!(table.similarity("cat", "car").unwrap().abs() < 1e-9);
    /// assert_eq!(table.similarity("cat", "unicorn"), None);
    /// ```
    pub fn from_text(content: &str) -> GameResult<Self> {
        let mut table = Self::default();
        for (idx, line) in content.lines().enumerate() {
            table.push_line(idx + 1, line, None)?;
        }
        Ok(table)
    }

    fn push_line(
        &mut self,
        line_no: usize,
        line: &str,
        keep: Option<&FxHashSet<String>>,
    ) -> GameResult<()> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(());
        };

        let rest: Vec<&str> = parts.collect();
        if line_no == 1 && is_header(word, &rest) {
            debug!(line, "skipping word2vec header");
            return Ok(());
        }

        let word = word.to_lowercase();
        if keep.is_some_and(|keep| !keep.contains(&word)) || self.vectors.contains_key(&word) {
            return Ok(());
        }

        let vector = rest
            .iter()
            .map(|v| v.parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GameError::Malformed {
                line: line_no,
                reason: format!("non-numeric component in vector for '{word}'"),
            })?;

        if vector.is_empty() {
            return Err(GameError::Malformed {
                line: line_no,
                reason: format!("'{word}' has no vector"),
            });
        }
        if self.dims == 0 {
            self.dims = vector.len();
        } else if vector.len() != self.dims {
            return Err(GameError::Malformed {
                line: line_no,
                reason: format!("expected {} dimensions, found {}", self.dims, vector.len()),
            });
        }

        self.vectors.insert(word, vector);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[must_use]
    pub const fn dims(&self) -> usize {
        self.dims
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(&word.to_lowercase())
    }
}

fn is_header(first: &str, rest: &[&str]) -> bool {
    rest.len() == 1 && first.parse::<usize>().is_ok() && rest[0].parse::<usize>().is_ok()
}

/// Cosine similarity; `None` when either vector has zero norm
fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

impl SimilarityOracle for EmbeddingTable {
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.vectors.get(&a.to_lowercase())?;
        let b = self.vectors.get(&b.to_lowercase())?;
        cosine(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 2\ncat 1 0\nkitten 0.9 0.1\ncar 0 1\n";

    #[test]
    fn skips_word2vec_header() {
        let table = EmbeddingTable::from_text(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.dims(), 2);
        assert!(!table.contains("3"));
    }

    #[test]
    fn similarity_is_symmetric_and_case_insensitive() {
        let table = EmbeddingTable::from_text(SAMPLE).unwrap();
        let ab = table.similarity("Cat", "kitten").unwrap();
        let ba = table.similarity("kitten", "CAT").unwrap();
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.9);
    }

    #[test]
    fn opposite_vectors_are_negative() {
        let table = EmbeddingTable::from_text("up 0 1\ndown 0 -1\n").unwrap();
        assert!((table.similarity("up", "down").unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_has_no_similarity() {
        let table = EmbeddingTable::from_text("void 0 0\ncat 1 0\n").unwrap();
        assert_eq!(table.similarity("void", "cat"), None);
    }

    #[test]
    fn rejects_inconsistent_dimensions() {
        let err = EmbeddingTable::from_text("cat 1 0\ndog 1 0 0\n").unwrap_err();
        assert!(matches!(err, GameError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_non_numeric_components() {
        let err = EmbeddingTable::from_text("cat 1 x\n").unwrap_err();
        assert!(matches!(err, GameError::Malformed { line: 1, .. }));
    }

    #[test]
    fn filtered_load_keeps_requested_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let keep: FxHashSet<String> = ["cat".to_string(), "car".to_string()].into_iter().collect();
        let table = EmbeddingTable::load_filtered(&path, Some(&keep)).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.contains("kitten"));
    }
}
