//! Adversarial feedback search
//!
//! The target is never known. For a guess, every way of classifying its
//! letters is tried against the corpus, and the classification that leaves
//! the most candidates alive becomes the feedback.

use super::constraints::{Constraints, assignment_count};
use super::filter::{count_candidates, filter_candidates};
use super::frequency::FrequencyModel;
use crate::core::Word;
use log::debug;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Winning classification of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Words consistent with the winning constraints, in input order
    pub corpus: Vec<Word>,
    pub constraints: Constraints,
}

/// Ranking of one assignment. Field order is comparison order:
/// more survivors, then more fixed letters, then earliest enumeration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    survivors: usize,
    fixed: usize,
    index: Reverse<usize>,
}

fn score_assignment(guess: &Word, corpus: &[Word], index: usize) -> Score {
    let constraints = Constraints::from_assignment(guess, index);
    let frequencies = FrequencyModel::from_constraints(&constraints, guess.len());

    Score {
        survivors: count_candidates(corpus, &constraints, &frequencies),
        fixed: constraints.fixed().len(),
        index: Reverse(index),
    }
}

/// Pick the least informative feedback for `guess`
///
/// All 3^n assignments of the guess positions to fixed, allowed and
/// forbidden are scored in parallel. The winner keeps the largest filtered
/// corpus; ties go to the assignment with more fixed letters, then to the
/// earliest one in enumeration order, so the result does not depend on
/// scheduling.
///
/// An empty corpus scores zero everywhere and yields the all-fixed
/// assignment with an empty corpus.
///
/// The guess must have the same length as the corpus words.
///
/// # Examples
/// ```
/// use wordle_adversary::core::Word;
/// use wordle_adversary::engine::search_best_feedback;
/// use wordle_adversary::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["cat", "cot", "cut"]);
/// let guess = Word::new("cat").unwrap();
///
/// let outcome = search_best_feedback(&guess, &corpus);
/// assert_eq!(outcome.corpus, words_from_slice(&["cot", "cut"]));
/// assert_eq!(outcome.constraints.forbidden(), &[(1, b'A')]);
/// ```
#[must_use]
pub fn search_best_feedback(guess: &Word, corpus: &[Word]) -> SearchOutcome {
    let total = assignment_count(guess.len());

    let best = (0..total)
        .into_par_iter()
        .map(|index| score_assignment(guess, corpus, index))
        .max();
    let Reverse(best_index) = best.map_or(Reverse(0), |score| score.index);

    let constraints = Constraints::from_assignment(guess, best_index);
    let frequencies = FrequencyModel::from_constraints(&constraints, guess.len());
    let narrowed = filter_candidates(corpus, &constraints, &frequencies);

    debug!(
        "{guess}: assignment {best_index} of {total} keeps {} of {} words ({} fixed, {} allowed, {} forbidden)",
        narrowed.len(),
        corpus.len(),
        constraints.fixed().len(),
        constraints.allowed().len(),
        constraints.forbidden().len(),
    );

    SearchOutcome {
        corpus: narrowed,
        constraints,
    }
}
