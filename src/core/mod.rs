//! Core domain types for the game
//!
//! Pure types with no I/O: word validation and clue calculation.

mod clue;
mod word;

pub use clue::{ABSENT_PLACEHOLDER, Clue, Mark};
pub use word::{WORD_LENGTH, Word, WordError, is_valid_word};
