//! Game session state
//!
//! Holds everything one game needs and applies player input to it. The
//! session does no console I/O; the play command renders its outcomes.

use crate::core::{Clue, Word, WordError};
use crate::wordlists::WordList;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Input that ends the game immediately
pub const EXIT_COMMAND: &str = "exit";

/// Why a guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Invalid(#[from] WordError),

    #[error("The input word isn't included in my words list.")]
    NotInWordList,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player asked to stop
    Exit,
    /// The input was rejected; the turn does not advance
    Rejected(GuessError),
    /// A valid guess that did not match the secret
    Miss,
    /// Solved on the first turn
    InstantWin,
    /// Solved after `turns` turns
    Solved { turns: u32, elapsed: Duration },
}

/// Letters known to be absent from the secret
///
/// Kept sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongLetters(BTreeSet<u8>);

impl WrongLetters {
    /// Add the absent letters of a clue
    pub fn record(&mut self, clue: &Clue) {
        self.0.extend(clue.absent_letters());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Banner text: sorted uppercase letters
    #[must_use]
    pub fn banner(&self) -> String {
        self.0
            .iter()
            .map(|&letter| char::from(letter.to_ascii_uppercase()))
            .collect()
    }
}

/// State of a single game
#[derive(Debug)]
pub struct GameSession<'a> {
    words: &'a WordList,
    secret: Word,
    turn: u32,
    started: Option<Instant>,
    wrong_letters: WrongLetters,
    history: Vec<Clue>,
}

impl<'a> GameSession<'a> {
    /// Start a game against `secret`, accepting guesses from `words`
    #[must_use]
    pub fn new(words: &'a WordList, secret: Word) -> Self {
        debug!(secret = %secret, "session started");
        Self {
            words,
            secret,
            turn: 1,
            started: None,
            wrong_letters: WrongLetters::default(),
            history: Vec::new(),
        }
    }

    /// Mark the clock origin if it is not set yet
    ///
    /// Called when the first prompt is shown.
    pub fn start_clock(&mut self) {
        self.started.get_or_insert_with(Instant::now);
    }

    /// Current turn, starting at 1
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Clues of every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Clue] {
        &self.history
    }

    #[must_use]
    pub const fn wrong_letters(&self) -> &WrongLetters {
        &self.wrong_letters
    }

    /// Apply one line of player input
    ///
    /// Input is trimmed and lowercased before it is checked.
    pub fn submit(&mut self, input: &str) -> TurnOutcome {
        let input = input.trim().to_lowercase();

        if input == EXIT_COMMAND {
            debug!(turn = self.turn, "player exited");
            return TurnOutcome::Exit;
        }

        let guess = match self.check_guess(&input) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(turn = self.turn, input = %input, error = %err, "guess rejected");
                return TurnOutcome::Rejected(err);
            }
        };

        if guess == self.secret && self.turn == 1 {
            debug!("solved on the first turn");
            return TurnOutcome::InstantWin;
        }

        let clue = Clue::calculate(&guess, &self.secret);
        debug!(turn = self.turn, clue = %clue, "guess accepted");

        if clue.is_solved() {
            self.history.push(clue);
            let elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
            return TurnOutcome::Solved {
                turns: self.turn,
                elapsed,
            };
        }

        self.wrong_letters.record(&clue);
        self.history.push(clue);
        self.turn += 1;
        TurnOutcome::Miss
    }

    fn check_guess(&self, input: &str) -> Result<Word, GuessError> {
        let guess = Word::new(input)?;
        if self.words.contains(&guess) {
            Ok(guess)
        } else {
            Err(GuessError::NotInWordList)
        }
    }
}
