//! Keyboard aggregate
//!
//! Tracks the best-known status of every letter across all guesses so far,
//! shown on the on-screen keyboard. A letter's status only escalates
//! (Absent → Present → Correct); once green it never moves back.

use super::{LetterStatus, WORD_LEN, Word};

/// Best-known status per letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: [Option<LetterStatus>; 26],
}

impl KeyboardState {
    /// Fresh keyboard with no letter statuses recorded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded status for a letter, if any
    ///
    /// Accepts uppercase or lowercase; returns `None` for non-letters and
    /// for letters that have not appeared in a guess yet.
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.statuses[(upper as u8 - b'A') as usize]
        } else {
            None
        }
    }

    /// Merge one evaluated guess into the aggregate
    ///
    /// Escalation rule: `Present` and `Correct` apply whenever they outrank
    /// the letter's current status; `Absent` applies only when the letter has
    /// no recorded status at all.
    pub fn merge(&mut self, guess: &Word, statuses: &[LetterStatus; WORD_LEN]) {
        for (i, &new_status) in statuses.iter().enumerate() {
            let slot = &mut self.statuses[(guess.char_at(i) - b'A') as usize];

            match *slot {
                None => *slot = Some(new_status),
                Some(current) if new_status.rank() > current.rank() => {
                    *slot = Some(new_status);
                }
                Some(_) => {}
            }
        }
    }
}
