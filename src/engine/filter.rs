//! Corpus filtering

use super::constraints::Constraints;
use super::frequency::FrequencyModel;
use super::predicate::is_good_candidate;
use crate::core::Word;

/// Return the words of `corpus` that satisfy the constraints, in input order
///
/// # Examples
/// ```
/// use wordle_adversary::engine::{filter_candidates, Constraints, FrequencyModel};
/// use wordle_adversary::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["bled", "sled", "fled"]);
/// let frequencies = FrequencyModel::unconstrained(4);
///
/// let starts_with_b = Constraints::new().with_fixed(0, b'B');
/// let kept = filter_candidates(&corpus, &starts_with_b, &frequencies);
/// assert_eq!(kept, words_from_slice(&["bled"]));
/// ```
#[must_use]
pub fn filter_candidates(
    corpus: &[Word],
    constraints: &Constraints,
    frequencies: &FrequencyModel,
) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| is_good_candidate(word, constraints, frequencies))
        .cloned()
        .collect()
}

/// Count the words of `corpus` that satisfy the constraints
///
/// Same result as `filter_candidates(..).len()` without building the list.
#[must_use]
pub fn count_candidates(
    corpus: &[Word],
    constraints: &Constraints,
    frequencies: &FrequencyModel,
) -> usize {
    corpus
        .iter()
        .filter(|word| is_good_candidate(word, constraints, frequencies))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CountRange;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Vec<Word> {
        words_from_slice(&["bled", "sled", "fled"])
    }

    fn open() -> FrequencyModel {
        FrequencyModel::unconstrained(4)
    }

    #[test]
    fn all_words_share_second_letter() {
        let constraints = Constraints::new().with_fixed(1, b'L');
        assert_eq!(filter_candidates(&corpus(), &constraints, &open()), corpus());
    }

    #[test]
    fn no_word_has_third_letter() {
        let constraints = Constraints::new().with_fixed(2, b'L');
        assert!(filter_candidates(&corpus(), &constraints, &open()).is_empty());
    }

    #[test]
    fn only_one_word_starts_with_b() {
        let constraints = Constraints::new().with_fixed(0, b'B');
        assert_eq!(
            filter_candidates(&corpus(), &constraints, &open()),
            words_from_slice(&["bled"])
        );
    }

    #[test]
    fn no_word_has_b_elsewhere() {
        let constraints = Constraints::new().with_allowed(0, b'B');
        assert!(filter_candidates(&corpus(), &constraints, &open()).is_empty());
    }

    #[test]
    fn no_word_contains_z() {
        let constraints = Constraints::new().with_allowed(0, b'Z');
        let frequencies = open().with_bound(b'Z', CountRange::new(1, 4));
        assert!(filter_candidates(&corpus(), &constraints, &frequencies).is_empty());
    }

    #[test]
    fn words_without_b_survive() {
        let constraints = Constraints::new().with_forbidden(1, b'B');
        let frequencies = open().with_bound(b'B', CountRange::exactly(0));
        assert_eq!(
            filter_candidates(&corpus(), &constraints, &frequencies),
            words_from_slice(&["sled", "fled"])
        );
    }

    #[test]
    fn every_word_has_an_e() {
        let constraints = Constraints::new().with_forbidden(1, b'E');
        let frequencies = open().with_bound(b'E', CountRange::exactly(0));
        assert!(filter_candidates(&corpus(), &constraints, &frequencies).is_empty());
    }

    #[test]
    fn count_matches_filter() {
        let constraints = Constraints::new().with_forbidden(1, b'B');
        let frequencies = open().with_bound(b'B', CountRange::exactly(0));
        assert_eq!(count_candidates(&corpus(), &constraints, &frequencies), 2);
        assert_eq!(count_candidates(&[], &constraints, &frequencies), 0);
    }

    #[test]
    fn input_is_left_untouched() {
        let original = corpus();
        let constraints = Constraints::new().with_fixed(0, b'S');
        let _ = filter_candidates(&original, &constraints, &open());
        assert_eq!(original, corpus());
    }
}
