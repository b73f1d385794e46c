//! Game state machine
//!
//! `GameState` owns everything one round needs: the hidden target, the
//! evaluated guesses so far, the partial guess being typed, and the keyboard
//! aggregate. All mutation goes through the transition methods here; the
//! presentation layer only reads.

use super::{KeyboardState, LetterStatus, WORD_LEN, Word, emoji_row, evaluate};
use rustc_hash::FxHashSet;
use std::fmt;

/// Maximum number of guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Phase of the game state machine
///
/// `Playing` is the only phase that accepts input. `Failed` is the terminal
/// non-playable phase entered when the word lists cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Loading,
    Playing,
    Won,
    Lost,
    Failed(String),
}

/// A submitted guess and its evaluation, immutable once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    statuses: [LetterStatus; WORD_LEN],
}

impl GuessRecord {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.statuses
    }

    /// True if every tile is green
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Emoji share row for this guess
    #[must_use]
    pub fn emoji(&self) -> String {
        emoji_row(&self.statuses)
    }
}

/// Why a submission was rejected
///
/// Rejections are recoverable: the round state is left untouched and the UI
/// shows a transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    TooShort(usize),
    NotInWordList(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(f, "Not enough letters ({len}/{WORD_LEN})"),
            Self::NotInWordList(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One tile of the guessing grid, as the presentation layer should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

/// State of a single round plus the phases around it
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    target: Option<Word>,
    records: Vec<GuessRecord>,
    current: String,
    keyboard: KeyboardState,
}

impl GameState {
    /// Initial state while word lists are still loading
    #[must_use]
    pub fn loading() -> Self {
        Self {
            phase: GamePhase::Loading,
            target: None,
            records: Vec::new(),
            current: String::new(),
            keyboard: KeyboardState::new(),
        }
    }

    /// Enter the terminal non-playable phase after a load failure
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = GamePhase::Failed(message.into());
    }

    /// Start a fresh round against `target`
    ///
    /// Resets all per-round state. Used both for the first round after the
    /// word lists load and for "play again".
    pub fn start(&mut self, target: Word) {
        self.phase = GamePhase::Playing;
        self.target = Some(target);
        self.records.clear();
        self.current.clear();
        self.keyboard = KeyboardState::new();
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// The hidden target, absent only before the first round starts
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Completed attempts, oldest first
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Zero-based index of the attempt currently being typed
    #[inline]
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.records.len()
    }

    /// The partial guess being typed (0 to 5 uppercase letters)
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Tile at grid position (`row`, `col`) for rendering
    ///
    /// Completed rows show their evaluation, the active row shows the partial
    /// guess as `Typing`, and everything below is `Empty`.
    ///
    /// # Panics
    /// Panics if `row >= MAX_ATTEMPTS` or `col >= WORD_LEN`.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        assert!(row < MAX_ATTEMPTS && col < WORD_LEN);

        if let Some(record) = self.records.get(row) {
            return Tile {
                letter: Some(record.word().char_at(col) as char),
                status: record.statuses()[col],
            };
        }

        if row == self.records.len()
            && self.phase == GamePhase::Playing
            && let Some(letter) = self.current.chars().nth(col)
        {
            return Tile {
                letter: Some(letter),
                status: LetterStatus::Typing,
            };
        }

        Tile {
            letter: None,
            status: LetterStatus::Empty,
        }
    }

    /// Append a letter to the partial guess
    ///
    /// Only single A-Z characters are accepted, only while `Playing`, and
    /// only while the partial guess has room. Everything else is silently
    /// ignored.
    pub fn push_letter(&mut self, letter: char) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.current.len() < WORD_LEN && letter.is_ascii_alphabetic() {
            self.current.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last letter of the partial guess (no-op when empty)
    pub fn delete_letter(&mut self) {
        if self.phase == GamePhase::Playing {
            self.current.pop();
        }
    }

    /// Submit the current partial guess
    ///
    /// On success the evaluated record is appended, the keyboard aggregate is
    /// updated, the partial guess is cleared, and the phase advances to `Won`
    /// (guess matched the target), `Lost` (sixth wrong guess) or stays
    /// `Playing`.
    ///
    /// # Errors
    /// `TooShort` if fewer than five letters were typed, `NotInWordList` if
    /// the word is not an accepted guess. Rejections leave all state
    /// untouched.
    ///
    /// # Panics
    /// Panics if called outside the `Playing` phase; the input dispatcher
    /// only routes Enter here while a round is live.
    pub fn submit(&mut self, valid_guesses: &FxHashSet<Word>) -> Result<&GuessRecord, SubmitError> {
        assert_eq!(self.phase, GamePhase::Playing, "submit outside Playing");

        if self.current.len() != WORD_LEN {
            return Err(SubmitError::TooShort(self.current.len()));
        }

        let word = Word::new(&self.current).expect("partial guess is 5 uppercase letters");

        if !valid_guesses.contains(&word) {
            return Err(SubmitError::NotInWordList(word.text().to_string()));
        }

        let target = self.target.as_ref().expect("Playing implies a target");
        let statuses = evaluate(&word, target);
        let record = GuessRecord { word, statuses };

        self.keyboard.merge(record.word(), record.statuses());
        self.records.push(record);
        self.current.clear();

        if self.records.last().is_some_and(GuessRecord::is_winning) {
            self.phase = GamePhase::Won;
        } else if self.records.len() == MAX_ATTEMPTS {
            self.phase = GamePhase::Lost;
        }

        Ok(self.records.last().expect("record just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_set(words: &[&str]) -> FxHashSet<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn playing(target: &str) -> GameState {
        let mut game = GameState::loading();
        game.start(Word::new(target).unwrap());
        game
    }

    fn type_word(game: &mut GameState, word: &str) {
        for c in word.chars() {
            game.push_letter(c);
        }
    }

    #[test]
    fn loading_ignores_input() {
        let mut game = GameState::loading();
        game.push_letter('a');
        game.delete_letter();

        assert_eq!(*game.phase(), GamePhase::Loading);
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn start_resets_round_state() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        type_word(&mut game, "crane");
        game.submit(&valid).unwrap();
        assert_eq!(game.attempt_index(), 1);

        game.start(Word::new("crane").unwrap());
        assert_eq!(*game.phase(), GamePhase::Playing);
        assert_eq!(game.attempt_index(), 0);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.keyboard().status('A'), None);
    }

    #[test]
    fn push_letter_uppercases_and_caps_at_five() {
        let mut game = playing("slate");

        type_word(&mut game, "crane");
        game.push_letter('s');
        assert_eq!(game.current_guess(), "CRANE");
    }

    #[test]
    fn push_letter_ignores_non_letters() {
        let mut game = playing("slate");

        game.push_letter('1');
        game.push_letter(' ');
        game.push_letter('é');
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn delete_letter_noop_when_empty() {
        let mut game = playing("slate");

        game.delete_letter();
        assert_eq!(game.current_guess(), "");

        game.push_letter('a');
        game.delete_letter();
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn submit_rejects_short_guess_without_mutation() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        type_word(&mut game, "cra");
        let err = game.submit(&valid).unwrap_err();

        assert_eq!(err, SubmitError::TooShort(3));
        assert_eq!(*game.phase(), GamePhase::Playing);
        assert_eq!(game.attempt_index(), 0);
        assert_eq!(game.current_guess(), "CRA");
        assert_eq!(game.keyboard().status('C'), None);
    }

    #[test]
    fn submit_rejects_unknown_word_without_mutation() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        type_word(&mut game, "zzzzz");
        let err = game.submit(&valid).unwrap_err();

        assert_eq!(err, SubmitError::NotInWordList("ZZZZZ".to_string()));
        assert_eq!(*game.phase(), GamePhase::Playing);
        assert_eq!(game.attempt_index(), 0);
        assert_eq!(game.current_guess(), "ZZZZZ");
        assert_eq!(game.keyboard().status('Z'), None);
    }

    #[test]
    fn submit_valid_guess_advances_one_attempt() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        type_word(&mut game, "crane");
        let record = game.submit(&valid).unwrap();
        assert!(!record.is_winning());

        assert_eq!(*game.phase(), GamePhase::Playing);
        assert_eq!(game.attempt_index(), 1);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.keyboard().status('A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn winning_guess_wins_at_any_attempt() {
        for prior_guesses in 0..MAX_ATTEMPTS {
            let mut game = playing("slate");
            let valid = valid_set(&["crane", "slate"]);

            for _ in 0..prior_guesses {
                type_word(&mut game, "crane");
                game.submit(&valid).unwrap();
            }

            type_word(&mut game, "slate");
            let record = game.submit(&valid).unwrap();
            assert!(record.is_winning());
            assert_eq!(*game.phase(), GamePhase::Won);
        }
    }

    #[test]
    fn sixth_wrong_guess_loses() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        for attempt in 0..MAX_ATTEMPTS {
            assert_eq!(*game.phase(), GamePhase::Playing);
            type_word(&mut game, "crane");
            game.submit(&valid).unwrap();
            assert_eq!(game.attempt_index(), attempt + 1);
        }

        assert_eq!(*game.phase(), GamePhase::Lost);
    }

    #[test]
    fn input_ignored_after_round_ends() {
        let mut game = playing("slate");
        let valid = valid_set(&["slate"]);

        type_word(&mut game, "slate");
        game.submit(&valid).unwrap();
        assert_eq!(*game.phase(), GamePhase::Won);

        game.push_letter('a');
        game.delete_letter();
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn tiles_track_records_typing_and_empty() {
        let mut game = playing("slate");
        let valid = valid_set(&["crane", "slate"]);

        type_word(&mut game, "crane");
        game.submit(&valid).unwrap();
        type_word(&mut game, "sl");

        // Completed row shows the evaluation.
        let tile = game.tile(0, 2);
        assert_eq!(tile.letter, Some('A'));
        assert_eq!(tile.status, LetterStatus::Correct);

        // Active row shows typed letters then blanks.
        assert_eq!(
            game.tile(1, 0),
            Tile {
                letter: Some('S'),
                status: LetterStatus::Typing
            }
        );
        assert_eq!(
            game.tile(1, 2),
            Tile {
                letter: None,
                status: LetterStatus::Empty
            }
        );

        // Future rows are empty.
        assert_eq!(game.tile(5, 4).status, LetterStatus::Empty);
    }

    #[test]
    fn lost_round_reveals_target() {
        let game = playing("slate");
        assert_eq!(game.target().unwrap().text(), "SLATE");
    }

    #[test]
    fn failed_phase_carries_message() {
        let mut game = GameState::loading();
        game.fail("word lists unavailable");

        assert_eq!(
            *game.phase(),
            GamePhase::Failed("word lists unavailable".to_string())
        );
    }
}
