//! Formatting utilities for terminal output

use crate::analysis::TaggedWord;

/// Format tagged words as a list of `('word', 'TAG')` pairs
#[must_use]
pub fn format_tagged(tagged: &[TaggedWord]) -> String {
    let pairs: Vec<String> = tagged
        .iter()
        .map(|t| format!("('{}', '{}')", t.word, t.tag))
        .collect();
    format!("[{}]", pairs.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a word count relative to the most frequent word
#[must_use]
pub fn frequency_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}
