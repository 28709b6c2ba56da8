//! One round of play
//!
//! Runs the feedback search for a guess and turns the winning constraints
//! into marks. Stateless: the caller threads the corpus between rounds.

use super::constraints::Constraints;
use super::search::{SearchOutcome, search_best_feedback};
use crate::core::{Feedback, Mark, Word};

/// Feedback and narrowed corpus for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub feedback: Feedback,
    pub corpus: Vec<Word>,
}

/// Marks for each position: correct if fixed, misplaced if allowed, else absent
#[must_use]
pub fn feedback_from_constraints(constraints: &Constraints, word_length: usize) -> Feedback {
    let marks = (0..word_length)
        .map(|position| {
            if constraints.is_fixed(position) {
                Mark::Correct
            } else if constraints.is_allowed_at(position) {
                Mark::Misplaced
            } else {
                Mark::Absent
            }
        })
        .collect();

    Feedback::new(marks)
}

/// Evaluate `guess` against `corpus` and render the adversary's feedback
///
/// # Examples
/// ```
/// use wordle_adversary::core::{Mark, Word};
/// use wordle_adversary::engine::play_round;
/// use wordle_adversary::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["cat", "cot", "cut"]);
/// let outcome = play_round(&Word::new("cat").unwrap(), &corpus);
///
/// assert_eq!(outcome.feedback.marks(), &[Mark::Correct, Mark::Absent, Mark::Correct]);
/// assert_eq!(outcome.corpus.len(), 2);
/// ```
#[must_use]
pub fn play_round(guess: &Word, corpus: &[Word]) -> RoundOutcome {
    let SearchOutcome {
        corpus,
        constraints,
    } = search_best_feedback(guess, corpus);

    RoundOutcome {
        feedback: feedback_from_constraints(&constraints, guess.len()),
        corpus,
    }
}
