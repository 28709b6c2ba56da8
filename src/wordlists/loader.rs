//! Word list loading utilities
//!
//! Provides functions to build a corpus from files or embedded constants.
//! Every loader uppercases, skips invalid entries and drops duplicates while
//! keeping the first occurrence.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_adversary::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);

    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited text into words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    dedup(text.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_adversary::wordlists::loader::words_from_slice;
/// use wordle_adversary::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().copied())
}

fn dedup<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|entry| Word::new(entry).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Keep only the words with `length` letters
#[must_use]
pub fn of_length(words: &[Word], length: usize) -> Vec<Word> {
    words
        .iter()
        .filter(|word| word.len() == length)
        .cloned()
        .collect()
}

/// Group words by length, preserving order within each group
#[must_use]
pub fn split_by_length(words: &[Word]) -> BTreeMap<usize, Vec<Word>> {
    let mut groups: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
    for word in words {
        groups.entry(word.len()).or_default().push(word.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crate", "TRACE", "React"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRATE");
        assert_eq!(words[1].text(), "TRACE");
        assert_eq!(words[2].text(), "REACT");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crate", "", "tr4ce", "toolongword", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRATE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_drops_duplicates() {
        let words = words_from_slice(&["sled", "bled", "SLED", "sled"]);
        assert_eq!(words, words_from_slice(&["sled", "bled"]));
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("bled\n  sled  \n\nfled\r\n");
        assert_eq!(words, words_from_slice(&["bled", "sled", "fled"]));
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_adversary_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "cat\ncot\n\ncut\ncat\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, words_from_slice(&["cat", "cot", "cut"]));
    }

    #[test]
    fn of_length_filters() {
        let words = words_from_slice(&["cat", "bled", "crate", "cot"]);
        assert_eq!(of_length(&words, 3), words_from_slice(&["cat", "cot"]));
        assert!(of_length(&words, 6).is_empty());
    }

    #[test]
    fn split_by_length_groups_words() {
        let words = words_from_slice(&["cat", "bled", "crate", "cot", "sled"]);
        let groups = split_by_length(&words);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&3], words_from_slice(&["cat", "cot"]));
        assert_eq!(groups[&4], words_from_slice(&["bled", "sled"]));
        assert_eq!(groups[&5], words_from_slice(&["crate"]));
    }
}
