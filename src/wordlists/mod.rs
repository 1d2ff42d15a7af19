//! Word data sources
//!
//! Vocabulary lists plus the file-backed frequency and similarity tables the
//! game uses as its collaborators.

pub mod embeddings;
pub mod frequency;
pub mod loader;

pub use embeddings::EmbeddingTable;
pub use frequency::FrequencyTable;
pub use loader::{clean_numbered_list, load_words, save_words, words_from_lines};
