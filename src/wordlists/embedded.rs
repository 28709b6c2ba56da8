//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one per supported length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Word lengths with an embedded list
pub const SUPPORTED_LENGTHS: [usize; 3] = [3, 4, 5];

/// Embedded word list for `length`, if one exists
#[must_use]
pub fn embedded(length: usize) -> Option<&'static [&'static str]> {
    match length {
        3 => Some(WORDS_3),
        4 => Some(WORDS_4),
        5 => Some(WORDS_5),
        _ => None,
    }
}
