//! Candidate predicate
//!
//! Decides whether a word is still consistent with a constraint set and a
//! frequency model.

use super::constraints::Constraints;
use super::frequency::FrequencyModel;
use crate::core::Word;

/// The positions of a word that no fixed letter covers
struct Residual<'a> {
    word: &'a Word,
    constraints: &'a Constraints,
}

impl Residual<'_> {
    /// Letter at a covered `position`, or `None` if out of range
    fn at(&self, position: usize) -> Option<u8> {
        self.word.letter_at(position)
    }

    fn covers(&self, position: usize) -> bool {
        !self.constraints.is_fixed(position)
    }

    fn contains(&self, letter: u8) -> bool {
        self.word
            .letters()
            .iter()
            .enumerate()
            .any(|(position, &l)| l == letter && self.covers(position))
    }
}

/// Check whether `word` could be the target given the constraints
///
/// Checks run cheapest first and short-circuit:
/// 1. every distinct letter's count lies within its frequency bound
/// 2. every fixed letter is in place
/// 3. every allowed letter is absent from its position but present elsewhere
///    among the non-fixed positions
/// 4. no forbidden letter sits at its position
///
/// Allowed and forbidden entries on fixed positions are ignored. A letter can
/// be fixed, allowed and forbidden at once (think `PUPPY`); only the count
/// bounds say how many copies the target holds.
///
/// # Examples
/// ```
/// use wordle_adversary::core::Word;
/// use wordle_adversary::engine::{is_good_candidate, Constraints, FrequencyModel};
///
/// let tenet = Word::new("tenet").unwrap();
/// let frequencies = FrequencyModel::unconstrained(5);
///
/// let fixed = Constraints::new().with_fixed(0, b'T').with_fixed(1, b'E');
/// assert!(is_good_candidate(&tenet, &fixed, &frequencies));
///
/// let misplaced = Constraints::new().with_allowed(1, b'E');
/// assert!(!is_good_candidate(&tenet, &misplaced, &frequencies));
/// ```
#[must_use]
pub fn is_good_candidate(word: &Word, constraints: &Constraints, frequencies: &FrequencyModel) -> bool {
    if !word
        .letter_counts()
        .into_iter()
        .all(|(letter, count)| frequencies.bound(letter).contains(count))
    {
        return false;
    }

    if constraints
        .fixed()
        .iter()
        .any(|(&position, &letter)| word.letter_at(position) != Some(letter))
    {
        return false;
    }

    let residual = Residual { word, constraints };

    let allowed_hold = constraints
        .allowed()
        .iter()
        .filter(|&&(position, _)| residual.covers(position))
        .all(|&(position, letter)| residual.at(position) != Some(letter) && residual.contains(letter));
    if !allowed_hold {
        return false;
    }

    constraints
        .forbidden()
        .iter()
        .filter(|&&(position, _)| residual.covers(position))
        .all(|&(position, letter)| residual.at(position) != Some(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CountRange;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn open() -> FrequencyModel {
        FrequencyModel::unconstrained(5)
    }

    #[test]
    fn two_fixed_letters() {
        let constraints = Constraints::new().with_fixed(0, b'T').with_fixed(1, b'E');
        assert!(is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn fixed_letter_not_in_word() {
        let constraints = Constraints::new().with_fixed(0, b'Z');
        assert!(!is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn allowed_letter_elsewhere_in_word() {
        let constraints = Constraints::new().with_allowed(0, b'E');
        assert!(is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn allowed_letter_at_its_own_position() {
        let constraints = Constraints::new().with_allowed(1, b'E');
        assert!(!is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn allowed_letter_missing() {
        let constraints = Constraints::new().with_allowed(0, b'Z');
        assert!(!is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn fixed_letter_with_forbidden_elsewhere() {
        let constraints = Constraints::new().with_fixed(2, b'N').with_forbidden(0, b'N');
        assert!(is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn frequency_excludes_letter() {
        let frequencies = open().with_bound(b'N', CountRange::exactly(0));
        assert!(!is_good_candidate(&word("tenet"), &Constraints::new(), &frequencies));
    }

    #[test]
    fn fixed_allowed_and_forbidden_same_letter() {
        // One fixed E, another E somewhere else, and no third E
        let constraints = Constraints::new()
            .with_fixed(1, b'E')
            .with_allowed(0, b'E')
            .with_forbidden(4, b'E');
        let frequencies = open().with_bound(b'E', CountRange::exactly(2));
        assert!(is_good_candidate(&word("tenet"), &constraints, &frequencies));
    }

    #[test]
    fn fixed_letter_without_second_copy() {
        let constraints = Constraints::new().with_fixed(1, b'E').with_forbidden(4, b'E');
        let frequencies = open().with_bound(b'E', CountRange::exactly(1));
        assert!(!is_good_candidate(&word("tenet"), &constraints, &frequencies));
    }

    #[test]
    fn allowed_letter_cannot_be_satisfied_by_fixed_copy() {
        // The only other E is at the fixed position, so the allowed E has nowhere to go
        let constraints = Constraints::new().with_fixed(1, b'E').with_allowed(0, b'E');
        assert!(!is_good_candidate(&word("beast"), &constraints, &open()));
        assert!(is_good_candidate(&word("tenet"), &constraints, &open()));
    }

    #[test]
    fn forbidden_at_position_only() {
        // TEPEE scored green, green, grey, yellow, grey rules out TENET:
        // the fourth letter cannot be an E
        let guess_constraints = Constraints::new()
            .with_fixed(0, b'T')
            .with_fixed(1, b'E')
            .with_forbidden(2, b'P')
            .with_allowed(3, b'E')
            .with_forbidden(4, b'E');
        let frequencies = FrequencyModel::from_constraints(&guess_constraints, 5);

        assert!(!is_good_candidate(&word("tenet"), &guess_constraints, &frequencies));
        assert!(is_good_candidate(&word("teeth"), &guess_constraints, &frequencies));
    }

    #[test]
    fn repeated_letter_in_all_three_categories() {
        // P fixed first, a second P misplaced, and a grey P at the end
        let constraints = Constraints::new()
            .with_fixed(0, b'P')
            .with_allowed(3, b'P')
            .with_forbidden(4, b'P');
        let frequencies = FrequencyModel::from_constraints(&constraints, 5);

        assert_eq!(frequencies.bound(b'P'), CountRange::exactly(2));
        assert!(is_good_candidate(&word("papas"), &constraints, &frequencies));
        assert!(!is_good_candidate(&word("puppy"), &constraints, &frequencies));
    }

    #[test]
    fn entries_on_fixed_positions_are_ignored() {
        // An E fixed at 1 outranks an allowed or forbidden E on the same square
        let constraints = Constraints::new()
            .with_fixed(1, b'E')
            .with_allowed(1, b'E')
            .with_forbidden(1, b'E');
        assert!(is_good_candidate(&word("tenet"), &constraints, &open()));
        assert!(is_good_candidate(&word("beast"), &constraints, &open()));
    }
}
