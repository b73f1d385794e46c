//! Guess feedback calculation and representation
//!
//! After each submitted guess every tile gets a status:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter occurs elsewhere in the target
//! - `Absent` (gray): letter not in the target (or occurrences exhausted)
//!
//! `Empty` and `Typing` are tile-only states used while a row is blank or
//! being typed; the evaluator never produces them.

use super::{WORD_LEN, Word};

/// Status of a single letter tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
    Empty,
    Typing,
}

impl LetterStatus {
    /// Ordering used by the keyboard aggregate: higher rank wins and a
    /// letter's status never moves back down.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Typing => 0,
        }
    }
}

/// Calculate the feedback when `guess` is guessed and `target` is the answer
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches (greens) and remove from available pool
/// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool;
///    everything else is gray
///
/// The function is pure: the same (guess, target) pair always yields the same
/// array, and the number of `Correct` + `Present` marks for any letter never
/// exceeds that letter's count in the target.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
///
/// // C(gray) R(gray) A(green) N(gray) E(green)
/// assert_eq!(
///     evaluate(&guess, &target),
///     [
///         LetterStatus::Absent,
///         LetterStatus::Absent,
///         LetterStatus::Correct,
///         LetterStatus::Absent,
///         LetterStatus::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [LetterStatus; WORD_LEN] {
    let mut result = [LetterStatus::Absent; WORD_LEN];
    let mut target_available = target.char_counts();

    // First pass: Mark greens (exact position matches)
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.chars()[i] == target.chars()[i] {
            result[i] = LetterStatus::Correct;

            // Remove from available pool
            let letter = guess.chars()[i];
            if let Some(count) = target_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Mark yellows (wrong position, but letter remains available)
    // Allow: Index needed to access guess[i] and check/set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if result[i] != LetterStatus::Correct {
            let letter = guess.chars()[i];
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }
    }

    result
}

/// Render a feedback row as emoji squares, for the end-of-round share summary
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, emoji_row};
///
/// let row = [
///     LetterStatus::Correct,
///     LetterStatus::Present,
///     LetterStatus::Absent,
///     LetterStatus::Correct,
///     LetterStatus::Present,
/// ];
/// assert_eq!(emoji_row(&row), "🟩🟨⬜🟩🟨");
/// ```
#[must_use]
pub fn emoji_row(statuses: &[LetterStatus; WORD_LEN]) -> String {
    let mut result = String::with_capacity(4 * WORD_LEN);

    for status in statuses {
        result.push(match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            _ => '⬜',
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn evaluate_all_gray() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();

        assert_eq!(evaluate(&guess, &target), [Absent; 5]);
    }

    #[test]
    fn evaluate_all_green() {
        let word = Word::new("abcde").unwrap();

        assert_eq!(evaluate(&word, &word), [Correct; 5]);
    }

    #[test]
    fn evaluate_correct_iff_positions_match() {
        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let result = evaluate(&guess, &target);

        for i in 0..5 {
            assert_eq!(
                result[i] == Correct,
                guess.char_at(i) == target.char_at(i),
                "position {i}"
            );
        }
    }

    #[test]
    fn evaluate_duplicate_letters_count_exhaustion() {
        // BBAAA vs AABBB: target has 2 A's and 3 B's.
        // Both B's are present; first two A's consume the target's two A's,
        // the third A finds the pool empty and goes gray.
        let guess = Word::new("bbaaa").unwrap();
        let target = Word::new("aabbb").unwrap();

        assert_eq!(
            evaluate(&guess, &target),
            [Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_green_takes_priority() {
        // PAPER vs APPLE: the P at position 2 is an exact match and is marked
        // first, leaving one P in the pool for position 0.
        let guess = Word::new("paper").unwrap();
        let target = Word::new("apple").unwrap();

        assert_eq!(
            evaluate(&guess, &target),
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O is yellow, second O is green.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();

        assert_eq!(
            evaluate(&guess, &target),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_marks_never_exceed_target_count() {
        let guess = Word::new("eerie").unwrap();
        let target = Word::new("speed").unwrap();
        let result = evaluate(&guess, &target);

        // SPEED has two E's; EERIE guesses three.
        let e_marks = (0..5)
            .filter(|&i| guess.char_at(i) == b'E' && result[i] != Absent)
            .count();
        assert_eq!(e_marks, 2);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let guess = Word::new("paper").unwrap();
        let target = Word::new("apple").unwrap();

        let first = evaluate(&guess, &target);
        for _ in 0..3 {
            assert_eq!(evaluate(&guess, &target), first);
        }
    }

    #[test]
    fn evaluate_self_match_for_repeated_letters() {
        for word in ["aaaaa", "speed", "erase"] {
            let w = Word::new(word).unwrap();
            assert_eq!(evaluate(&w, &w), [Correct; 5]);
        }
    }

    #[test]
    fn status_rank_ordering() {
        assert!(Correct.rank() > Present.rank());
        assert!(Present.rank() > Absent.rank());
        assert!(Absent.rank() > LetterStatus::Empty.rank());
        assert_eq!(LetterStatus::Empty.rank(), LetterStatus::Typing.rank());
    }

    #[test]
    fn emoji_row_renders_all_statuses() {
        let row = [Correct, Present, Absent, Present, Correct];
        assert_eq!(emoji_row(&row), "🟩🟨⬜🟨🟩");
    }
}
