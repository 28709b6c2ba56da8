//! Word lists for the puzzle
//!
//! Provides embedded word lists compiled into the binary and loaders for
//! newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{
    SUPPORTED_LENGTHS, WORDS_3, WORDS_3_COUNT, WORDS_4, WORDS_4_COUNT, WORDS_5, WORDS_5_COUNT,
    embedded,
};
