//! Constraint sets derived from one guess
//!
//! Every guess position lands in exactly one category: fixed (the target has
//! this letter here), allowed (the letter is elsewhere) or forbidden (not
//! here, and no unseen copies).

use crate::core::Word;
use std::collections::BTreeMap;

/// Classification of one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fixed,
    Allowed,
    Forbidden,
}

impl Category {
    const fn from_digit(digit: usize) -> Self {
        match digit {
            0 => Self::Fixed,
            1 => Self::Allowed,
            _ => Self::Forbidden,
        }
    }
}

/// Number of ways to classify every position of a word of this length
///
/// # Examples
/// ```
/// use wordle_adversary::engine::assignment_count;
///
/// assert_eq!(assignment_count(5), 243);
/// ```
#[must_use]
pub const fn assignment_count(word_length: usize) -> usize {
    3usize.pow(word_length as u32)
}

/// Decode an assignment index into one category per position
///
/// Indices follow Cartesian-product order: position 0 is the most significant
/// base-3 digit, and `Fixed < Allowed < Forbidden`. Index 0 is all fixed.
#[must_use]
pub fn categories(index: usize, word_length: usize) -> Vec<Category> {
    let mut categories = vec![Category::Fixed; word_length];
    let mut remaining = index;

    for category in categories.iter_mut().rev() {
        *category = Category::from_digit(remaining % 3);
        remaining /= 3;
    }

    categories
}

/// Fixed, allowed and forbidden letters of one guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed: BTreeMap<usize, u8>,
    allowed: Vec<(usize, u8)>,
    forbidden: Vec<(usize, u8)>,
}

impl Constraints {
    /// Empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert `letter` at `position`, replacing any earlier fixed letter there
    #[must_use]
    pub fn with_fixed(mut self, position: usize, letter: u8) -> Self {
        self.fixed.insert(position, letter.to_ascii_uppercase());
        self
    }

    /// Assert `letter` is in the word but not at `position`
    #[must_use]
    pub fn with_allowed(mut self, position: usize, letter: u8) -> Self {
        self.allowed.push((position, letter.to_ascii_uppercase()));
        self
    }

    /// Assert `position` does not hold `letter`
    #[must_use]
    pub fn with_forbidden(mut self, position: usize, letter: u8) -> Self {
        self.forbidden.push((position, letter.to_ascii_uppercase()));
        self
    }

    /// Partition the letters of `guess` by category
    ///
    /// Positions beyond `categories` are left unclassified.
    #[must_use]
    pub fn from_categories(guess: &Word, categories: &[Category]) -> Self {
        guess
            .letters()
            .iter()
            .zip(categories)
            .enumerate()
            .fold(Self::new(), |constraints, (position, (&letter, category))| {
                match category {
                    Category::Fixed => constraints.with_fixed(position, letter),
                    Category::Allowed => constraints.with_allowed(position, letter),
                    Category::Forbidden => constraints.with_forbidden(position, letter),
                }
            })
    }

    /// Partition the letters of `guess` by the assignment at `index`
    ///
    /// See [`categories`] for the index order.
    #[must_use]
    pub fn from_assignment(guess: &Word, index: usize) -> Self {
        Self::from_categories(guess, &categories(index, guess.len()))
    }

    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &BTreeMap<usize, u8> {
        &self.fixed
    }

    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[(usize, u8)] {
        &self.allowed
    }

    #[inline]
    #[must_use]
    pub fn forbidden(&self) -> &[(usize, u8)] {
        &self.forbidden
    }

    #[inline]
    #[must_use]
    pub fn is_fixed(&self, position: usize) -> bool {
        self.fixed.contains_key(&position)
    }

    /// Check if any allowed entry sits at `position`
    #[must_use]
    pub fn is_allowed_at(&self, position: usize) -> bool {
        self.allowed.iter().any(|&(pos, _)| pos == position)
    }

    /// Check if the set carries any fixed or allowed letter
    #[must_use]
    pub fn reveals_presence(&self) -> bool {
        !self.fixed.is_empty() || !self.allowed.is_empty()
    }
}
