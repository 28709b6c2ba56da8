//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no engine logic.
//! All types here are pure, testable, and independent of word length.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
