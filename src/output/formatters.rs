//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Color one letter by its mark
#[must_use]
pub fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Mark::Correct => tile.black().on_green().bold(),
        Mark::Misplaced => tile.black().on_yellow().bold(),
        Mark::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| colored_letter(letter, mark).to_string())
        .collect()
}

/// Short list of words for display, with a count of the rest
#[must_use]
pub fn word_preview(words: &[Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(Word::text).collect();
    let mut preview = shown.join(", ");
    if words.len() > limit {
        let _ = write!(preview, " (+{} more)", words.len() - limit);
    }
    preview
}
