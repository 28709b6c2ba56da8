//! Per-letter count bounds
//!
//! A frequency model records, for each letter, the range of counts the target
//! may contain. Letters that were never observed fall back to the full range
//! `[0, word length]`.

use super::constraints::Constraints;
use rustc_hash::FxHashMap;

/// Inclusive range of letter counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountRange {
    min: usize,
    max: usize,
}

impl CountRange {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range holding a single count
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self::new(count, count)
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Count bounds for every letter of the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyModel {
    word_length: usize,
    bounds: FxHashMap<u8, CountRange>,
}

impl FrequencyModel {
    /// Model with no observations: every letter may appear 0 to `word_length` times
    #[must_use]
    pub fn unconstrained(word_length: usize) -> Self {
        Self {
            word_length,
            bounds: FxHashMap::default(),
        }
    }

    /// Override the bound of one letter
    #[must_use]
    pub fn with_bound(mut self, letter: u8, range: CountRange) -> Self {
        self.bounds.insert(letter.to_ascii_uppercase(), range);
        self
    }

    /// Derive the bounds implied by a single guess's constraint set
    ///
    /// The lower bound of a letter is the number of fixed and allowed entries
    /// carrying it. Any forbidden entry for the letter means there are no
    /// further copies, so the upper bound collapses onto the lower bound;
    /// otherwise the upper bound is the word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_adversary::engine::{Constraints, CountRange, FrequencyModel};
    ///
    /// // TEPEE scored as green, green, grey, yellow, grey
    /// let constraints = Constraints::new()
    ///     .with_fixed(0, b'T')
    ///     .with_fixed(1, b'E')
    ///     .with_forbidden(2, b'P')
    ///     .with_allowed(3, b'E')
    ///     .with_forbidden(4, b'E');
    /// let model = FrequencyModel::from_constraints(&constraints, 5);
    ///
    /// assert_eq!(model.bound(b'E'), CountRange::exactly(2));
    /// assert_eq!(model.bound(b'T'), CountRange::new(1, 5));
    /// assert_eq!(model.bound(b'P'), CountRange::exactly(0));
    /// assert_eq!(model.bound(b'Z'), CountRange::new(0, 5));
    /// ```
    #[must_use]
    pub fn from_constraints(constraints: &Constraints, word_length: usize) -> Self {
        let mut minimums: FxHashMap<u8, usize> = FxHashMap::default();
        for &letter in constraints.fixed().values() {
            *minimums.entry(letter).or_insert(0) += 1;
        }
        for &(_, letter) in constraints.allowed() {
            *minimums.entry(letter).or_insert(0) += 1;
        }
        for &(_, letter) in constraints.forbidden() {
            minimums.entry(letter).or_insert(0);
        }

        let bounds = minimums
            .into_iter()
            .map(|(letter, min)| {
                let capped = constraints
                    .forbidden()
                    .iter()
                    .any(|&(_, forbidden)| forbidden == letter);
                let max = if capped { min } else { word_length };
                (letter, CountRange::new(min, max))
            })
            .collect();

        Self {
            word_length,
            bounds,
        }
    }

    /// Range of counts the target may hold for `letter`
    #[must_use]
    pub fn bound(&self, letter: u8) -> CountRange {
        self.bounds
            .get(&letter)
            .copied()
            .unwrap_or(CountRange::new(0, self.word_length))
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
