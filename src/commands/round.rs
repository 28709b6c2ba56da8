//! Single round command
//!
//! Evaluates one guess against a full corpus and reports what survives.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameState};

/// Result of evaluating one guess
pub struct RoundReport {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub remaining: Vec<Word>,
}

/// Evaluate `guess` against `corpus`
///
/// # Errors
///
/// Returns an error if the corpus mixes word lengths or the guess is not a
/// valid word of `word_length` letters.
pub fn evaluate_guess(
    guess: &str,
    corpus: Vec<Word>,
    word_length: usize,
) -> Result<RoundReport, GameError> {
    let mut game = GameState::new(word_length, corpus)?;
    let turn = game.guess(guess)?;

    Ok(RoundReport {
        guess: turn.guess,
        feedback: turn.feedback,
        candidates_before: turn.candidates_before,
        remaining: game.candidates().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::wordlists::WORDS_4;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn evaluate_small_corpus() {
        let corpus = words_from_slice(&["bled", "sled", "fled"]);
        let report = evaluate_guess("sled", corpus, 4).unwrap();

        assert_eq!(report.guess.text(), "SLED");
        assert_eq!(report.candidates_before, 3);
        assert_eq!(report.remaining, words_from_slice(&["bled", "fled"]));
        assert_eq!(
            report.feedback.marks(),
            &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Correct]
        );
    }

    #[test]
    fn evaluate_embedded_corpus_narrows() {
        let corpus = words_from_slice(WORDS_4);
        let total = corpus.len();
        let report = evaluate_guess("sled", corpus, 4).unwrap();

        assert_eq!(report.candidates_before, total);
        assert!(!report.remaining.is_empty());
        assert!(report.remaining.len() < total);
    }

    #[test]
    fn evaluate_rejects_wrong_length() {
        let corpus = words_from_slice(&["bled", "sled"]);
        assert!(evaluate_guess("crate", corpus, 4).is_err());
    }
}
