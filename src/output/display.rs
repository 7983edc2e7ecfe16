//! Display functions for game events

use super::formatters::{clue_row, solved_row, wrong_letters_banner};
use crate::core::{Clue, Word};
use crate::game::{GuessError, WrongLetters};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Print the game title
pub fn print_title(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Words Virtuoso".bright_cyan().bold())
}

pub fn print_prompt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Input a 5-letter word:")?;
    out.flush()
}

/// Print why a guess was rejected
pub fn print_rejection(out: &mut impl Write, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().yellow())
}

/// Print every clue so far, oldest first, then the wrong-letters banner
pub fn print_board(
    out: &mut impl Write,
    history: &[Clue],
    wrong: &WrongLetters,
) -> io::Result<()> {
    writeln!(out)?;
    for clue in history {
        writeln!(out, "{}", clue_row(clue))?;
    }
    writeln!(out, "{}", wrong_letters_banner(wrong))?;
    writeln!(out)
}

/// Print the win on the first guess
pub fn print_instant_win(out: &mut impl Write, secret: &Word) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", solved_row(secret))?;
    writeln!(out, "{}", "Correct!".bright_green().bold())?;
    writeln!(out, "Amazing luck! The solution was found at once.")
}

/// Print the win after several turns
pub fn print_solved(
    out: &mut impl Write,
    history: &[Clue],
    turns: u32,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out)?;
    for clue in history {
        writeln!(out, "{}", clue_row(clue))?;
    }
    writeln!(out, "{}", "Correct!".bright_green().bold())?;
    writeln!(
        out,
        "The solution was found after {turns} tries in {} seconds.",
        elapsed.as_secs()
    )
}

pub fn print_game_over(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "The game is over.")
}
