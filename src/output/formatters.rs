//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Feedback, FeedbackCode, Word};

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: FeedbackCode) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.iter())
        .map(|(ch, fb)| {
            let tile = format!(" {ch} ");
            match fb {
                Feedback::Exact => tile.black().on_green().to_string(),
                Feedback::Present => tile.black().on_yellow().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: the ratio is clamped to [0, 1]
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most it could be (`log2` of the candidates)
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
