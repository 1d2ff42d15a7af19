//! Formatting utilities for terminal output

use crate::core::display_similarity;

/// Coarse similarity bands used to color history rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    Cold,
    Warm,
    Hot,
}

impl SimilarityBand {
    /// Band for a raw similarity; negatives count as cold
    #[must_use]
    pub fn of(similarity: f64) -> Self {
        let s = display_similarity(similarity);
        if s < 0.33 {
            Self::Cold
        } else if s < 0.66 {
            Self::Warm
        } else {
            Self::Hot
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Similarity as a bar, clamped to `[0, 1]`
#[must_use]
pub fn similarity_bar(similarity: f64, width: usize) -> String {
    create_progress_bar(display_similarity(similarity), 1.0, width)
}

/// Similarity as a percentage with two decimals, e.g. `42.17%`
#[must_use]
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}%", display_similarity(similarity) * 100.0)
}
