//! Game state threaded between rounds
//!
//! The engine is stateless; a `GameState` owns the current corpus and the
//! ordered guess history, validates guesses before they reach the engine and
//! keeps corpus snapshots so turns can be undone.

use crate::core::{Feedback, Word, WordError};
use crate::engine::play_round;
use log::{debug, info};
use std::fmt;

/// Errors raised when a guess or corpus does not fit the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWord(WordError),
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected a {expected}-letter word, got {actual} letters")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A single played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Current corpus plus everything played so far
#[derive(Debug, Clone)]
pub struct GameState {
    word_length: usize,
    corpus: Vec<Word>,
    history: Vec<Turn>,
    snapshots: Vec<Vec<Word>>,
}

impl GameState {
    /// Start a game over `corpus`
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if any word does not have `word_length` letters.
    pub fn new(word_length: usize, corpus: Vec<Word>) -> Result<Self, GameError> {
        if let Some(word) = corpus.iter().find(|word| word.len() != word_length) {
            return Err(GameError::LengthMismatch {
                expected: word_length,
                actual: word.len(),
            });
        }

        info!(
            "New game with {} {word_length}-letter words",
            corpus.len()
        );

        Ok(Self {
            word_length,
            corpus,
            history: Vec::new(),
            snapshots: Vec::new(),
        })
    }

    /// Play one guess and narrow the corpus
    ///
    /// # Errors
    /// Returns `GameError` if the guess is not a valid word of the game's length.
    /// The state is left untouched on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_adversary::game::GameState;
    /// use wordle_adversary::wordlists::loader::words_from_slice;
    ///
    /// let mut game = GameState::new(4, words_from_slice(&["bled", "sled", "fled"])).unwrap();
    /// let turn = game.guess("sled").unwrap();
    ///
    /// assert_eq!(turn.candidates_after, 2);
    /// assert!(game.guess("sleds").is_err());
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<Turn, GameError> {
        let guess = Word::new(input.trim())?;
        if guess.len() != self.word_length {
            return Err(GameError::LengthMismatch {
                expected: self.word_length,
                actual: guess.len(),
            });
        }

        let outcome = play_round(&guess, &self.corpus);
        let turn = Turn {
            guess,
            feedback: outcome.feedback,
            candidates_before: self.corpus.len(),
            candidates_after: outcome.corpus.len(),
        };

        debug!(
            "Turn {}: {} {} ({} -> {} words)",
            self.history.len() + 1,
            turn.guess,
            turn.feedback,
            turn.candidates_before,
            turn.candidates_after
        );

        self.snapshots
            .push(std::mem::replace(&mut self.corpus, outcome.corpus));
        self.history.push(turn.clone());

        Ok(turn)
    }

    /// Take back the last guess
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match (self.history.pop(), self.snapshots.pop()) {
            (Some(turn), Some(corpus)) => {
                debug!("Undid {}", turn.guess);
                self.corpus = corpus;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words still consistent with every guess
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.corpus
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.corpus.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Check if the last guess was answered all correct
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|turn| turn.feedback.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::wordlists::loader::words_from_slice;

    fn game() -> GameState {
        GameState::new(3, words_from_slice(&["cat", "cot", "cut"])).unwrap()
    }

    #[test]
    fn new_rejects_mixed_lengths() {
        let result = GameState::new(3, words_from_slice(&["cat", "bled"]));
        assert_eq!(
            result.unwrap_err(),
            GameError::LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn new_accepts_empty_corpus() {
        let game = GameState::new(5, Vec::new()).unwrap();
        assert_eq!(game.candidate_count(), 0);
        assert!(!game.is_won());
    }

    #[test]
    fn guess_narrows_corpus_and_records_turn() {
        let mut game = game();
        let turn = game.guess("cat").unwrap();

        assert_eq!(turn.candidates_before, 3);
        assert_eq!(turn.candidates_after, 2);
        assert_eq!(
            turn.feedback.marks(),
            &[Mark::Correct, Mark::Absent, Mark::Correct]
        );
        assert_eq!(game.candidates(), words_from_slice(&["cot", "cut"]).as_slice());
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_won());
    }

    #[test]
    fn guess_accepts_lowercase_and_whitespace() {
        let mut game = game();
        assert_eq!(game.guess("  CaT \n").unwrap().guess.text(), "CAT");
    }

    #[test]
    fn guess_rejects_wrong_length_without_changing_state() {
        let mut game = game();
        let err = game.guess("cats").unwrap_err();

        assert_eq!(
            err,
            GameError::LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
        assert_eq!(game.candidate_count(), 3);
        assert!(game.history().is_empty());
    }

    #[test]
    fn guess_rejects_invalid_characters() {
        let mut game = game();
        assert_eq!(
            game.guess("c4t").unwrap_err(),
            GameError::InvalidWord(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn game_is_won_when_ties_favor_the_guess() {
        let mut game = game();
        game.guess("cat").unwrap();
        assert!(!game.is_won());

        // COT and CUT each survive one classification; the all-fixed one wins the tie
        let turn = game.guess("cot").unwrap();
        assert!(turn.feedback.is_solved());
        assert_eq!(game.candidates(), words_from_slice(&["cot"]).as_slice());
        assert!(game.is_won());
    }

    #[test]
    fn undo_restores_previous_corpus() {
        let mut game = game();
        game.guess("cat").unwrap();
        game.guess("cot").unwrap();

        assert!(game.is_won());
        assert!(game.undo());
        assert!(!game.is_won());
        assert_eq!(game.candidates(), words_from_slice(&["cot", "cut"]).as_slice());
        assert_eq!(game.history().len(), 1);

        assert!(game.undo());
        assert_eq!(game.candidate_count(), 3);
        assert!(!game.undo());
    }

    #[test]
    fn error_messages() {
        let mismatch = GameError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert_eq!(mismatch.to_string(), "Expected a 5-letter word, got 3 letters");

        let invalid = GameError::from(WordError::NonAscii);
        assert_eq!(
            invalid.to_string(),
            "Invalid guess: Word must contain only ASCII letters"
        );
    }
}
