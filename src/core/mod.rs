//! Core domain types
//!
//! Vocabulary records and the traits behind which the similarity and frequency
//! collaborators live. Nothing here performs I/O.

mod oracle;
mod vocabulary;

pub use oracle::{
    FALLBACK_SIMILARITY, FrequencyOracle, SimilarityOracle, display_similarity,
    similarity_or_fallback,
};
pub use vocabulary::{ScoredWord, VocabularyEntry, entries_from_words};
