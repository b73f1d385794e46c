//! Word lists for the game
//!
//! Two lists drive a round: `answers` (the pool the hidden target is drawn
//! from) and the extra dictionary of words accepted as guesses. The set of
//! valid guesses is their union. Defaults are embedded at build time; either
//! list can be replaced with a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES_EXTRA, GUESSES_EXTRA_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Failure to produce a usable answers/valid-guesses pair
///
/// Fatal for the session: the game enters its terminal non-playable phase
/// and no retry is attempted.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    EmptyAnswers,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::EmptyAnswers => write!(f, "Answers list is empty after filtering"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::EmptyAnswers => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// The answers pool and the set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<Word>,
    valid: FxHashSet<Word>,
}

impl WordLists {
    /// Build the lists from already-filtered words
    ///
    /// The valid-guess set is `answers ∪ extra`; duplicates collapse in the
    /// set.
    ///
    /// # Errors
    /// `LoadError::EmptyAnswers` if no answer words survived filtering.
    pub fn new(answers: Vec<Word>, extra: Vec<Word>) -> Result<Self, LoadError> {
        if answers.is_empty() {
            return Err(LoadError::EmptyAnswers);
        }

        let valid: FxHashSet<Word> = answers.iter().cloned().chain(extra).collect();

        Ok(Self { answers, valid })
    }

    /// Build the lists from the embedded defaults
    ///
    /// # Errors
    /// `LoadError::EmptyAnswers` if the embedded answers list is empty,
    /// which would mean a broken build.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(GUESSES_EXTRA),
        )
    }

    /// Build the lists from the embedded defaults with optional file overrides
    ///
    /// This is the one-time load at startup: each override path replaces the
    /// corresponding embedded list wholesale.
    ///
    /// # Errors
    /// I/O failure reading an override file, or an empty answers list after
    /// filtering.
    pub fn load(
        answers_path: Option<&Path>,
        guesses_path: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let answers = match answers_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(ANSWERS),
        };
        let extra = match guesses_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(GUESSES_EXTRA),
        };

        Self::new(answers, extra)
    }

    /// Words the target can be drawn from
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// The full set of accepted guesses (answers plus extra dictionary)
    #[inline]
    #[must_use]
    pub const fn valid_guesses(&self) -> &FxHashSet<Word> {
        &self.valid
    }

    /// Check whether a word may be submitted as a guess
    #[inline]
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Pick a target uniformly at random from the answers pool
    ///
    /// The RNG is injected so tests can seed it for deterministic rounds.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Non-empty by construction (`new` rejects empty answers)
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }
}
