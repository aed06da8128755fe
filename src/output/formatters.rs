//! Formatting utilities for terminal output

use crate::core::Anagram;

/// Format a group as one line of space-joined words
#[must_use]
pub fn format_group(anagram: &Anagram) -> String {
    anagram.words().join(" ")
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

/// Format a score as a bar relative to the largest score shown
#[must_use]
pub fn score_bar(score: usize, max_score: usize, width: usize) -> String {
    create_progress_bar(score as f64, max_score as f64, width)
}
