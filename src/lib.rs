//! Wordle Game
//!
//! A terminal rendition of the word-guessing game: six attempts to find a
//! hidden five-letter word, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, Word, evaluate};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! // Calculate feedback
//! let statuses = evaluate(&guess, &target);
//! assert_eq!(statuses[2], LetterStatus::Correct); // The A lines up
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Interactive TUI interface
pub mod interactive;
