//! Automatic play against the adversary
//!
//! The player opens with a chosen word, TRACE when the corpus has it, or a
//! random word, then keeps guessing a random word among the remaining
//! candidates until the adversary runs out of room.

use crate::core::Word;
use crate::game::{GameError, GameState, Turn};
use log::info;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Opening guess when none is configured and the corpus contains it
pub const DEFAULT_OPENER: &str = "TRACE";

/// Configuration for an automatic game
pub struct AutoConfig {
    pub first_guess: Option<String>,
    pub seed: Option<u64>,
    pub max_turns: usize,
}

impl AutoConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_guess: None,
            seed: None,
            max_turns: 20,
        }
    }
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an automatic game
pub struct AutoPlayResult {
    pub won: bool,
    pub turns: Vec<Turn>,
    pub starting_candidates: usize,
    pub remaining: Vec<Word>,
}

/// Play a full game with random guesses drawn from the surviving words
///
/// # Errors
///
/// Returns an error if the corpus mixes word lengths or the first guess is
/// not a valid word of `word_length` letters.
pub fn run_auto(
    config: AutoConfig,
    corpus: Vec<Word>,
    word_length: usize,
) -> Result<AutoPlayResult, GameError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let starting_candidates = corpus.len();
    let mut game = GameState::new(word_length, corpus)?;

    let mut next = config.first_guess.or_else(|| default_opener(game.candidates()));
    while game.history().len() < config.max_turns && !game.is_won() {
        let guess = match next.take() {
            Some(guess) => guess,
            None => match game.candidates().choose(&mut rng) {
                Some(word) => word.text().to_string(),
                None => break,
            },
        };

        game.guess(&guess)?;
    }

    info!(
        "Auto game finished after {} turns ({} candidates left)",
        game.history().len(),
        game.candidate_count()
    );

    Ok(AutoPlayResult {
        won: game.is_won(),
        turns: game.history().to_vec(),
        starting_candidates,
        remaining: game.candidates().to_vec(),
    })
}

fn default_opener(corpus: &[Word]) -> Option<String> {
    corpus
        .iter()
        .any(|word| word.text() == DEFAULT_OPENER)
        .then(|| DEFAULT_OPENER.to_string())
}
