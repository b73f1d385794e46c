//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod game;
mod keyboard;
mod word;

pub use feedback::{LetterStatus, emoji_row, evaluate};
pub use game::{GamePhase, GameState, GuessRecord, MAX_ATTEMPTS, SubmitError, Tile};
pub use keyboard::KeyboardState;
pub use word::{WORD_LEN, Word, WordError};
