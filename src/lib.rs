//! Words Virtuoso
//!
//! A terminal word-guessing game. Every word has five distinct letters;
//! each guess is answered with a clue marking letters as correct, present
//! or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use words_virtuoso::core::{Clue, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! let clue = Clue::calculate(&guess, &secret);
//! assert_eq!(clue.plain(), "__a_e");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state and rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
