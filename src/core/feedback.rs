//! Per-letter feedback for a guess
//!
//! Feedback is an abstract sequence of three-valued marks, one per guess
//! position. Turning it into glyphs or colors is left to `output`.

use std::fmt;

/// Feedback class of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter confirmed at this exact position (green)
    Correct,
    /// Letter present in the target but not here (yellow)
    Misplaced,
    /// Letter not at this position, and no unseen copies elsewhere (grey)
    Absent,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The marks, in guess position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛"
    ///
    /// # Examples
    /// ```
    /// use wordle_adversary::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::new(vec![Mark::Correct, Mark::Misplaced, Mark::Absent]);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
