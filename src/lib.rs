//! Adversarial Wordle
//!
//! A word puzzle engine that never commits to a target. Each guess is answered
//! with the feedback that leaves the most candidate words alive, breaking ties
//! toward more correct letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_adversary::core::Word;
//! use wordle_adversary::engine::play_round;
//! use wordle_adversary::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["bled", "sled", "fled"]);
//! let guess = Word::new("sled").unwrap();
//!
//! let outcome = play_round(&guess, &corpus);
//! println!("{} leaves {} words", outcome.feedback, outcome.corpus.len());
//! ```

// Core domain types
pub mod core;

// Constraint inference and filtering
pub mod engine;

// Caller-owned game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
