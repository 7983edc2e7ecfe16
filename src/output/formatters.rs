//! Formatting utilities for terminal output
//!
//! Clue letters are drawn on 256-color backgrounds.

use crate::core::{Clue, Mark, Word};
use crate::game::WrongLetters;
use crossterm::style::{Color, StyledContent, Stylize};

/// Background for letters in the right position
pub const CORRECT_COLOR: Color = Color::AnsiValue(10);
/// Background for letters elsewhere in the word
pub const PRESENT_COLOR: Color = Color::AnsiValue(11);
/// Background for letters not in the word
pub const ABSENT_COLOR: Color = Color::AnsiValue(7);
/// Background for the wrong-letters banner
pub const BANNER_COLOR: Color = Color::AnsiValue(14);

/// Background color for a mark
#[must_use]
pub const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => CORRECT_COLOR,
        Mark::Present => PRESENT_COLOR,
        Mark::Absent => ABSENT_COLOR,
    }
}

/// Format one letter as an uppercase tile
#[must_use]
pub fn letter_tile(letter: u8, mark: Mark) -> StyledContent<char> {
    char::from(letter.to_ascii_uppercase()).on(mark_color(mark))
}

/// Format a clue as a row of colored tiles
#[must_use]
pub fn clue_row(clue: &Clue) -> String {
    clue.letters()
        .map(|(letter, mark)| letter_tile(letter, mark).to_string())
        .collect()
}

/// Format a word as a fully solved row
#[must_use]
pub fn solved_row(word: &Word) -> String {
    word.chars()
        .iter()
        .map(|&letter| letter_tile(letter, Mark::Correct).to_string())
        .collect()
}

/// Format the wrong-letters banner
#[must_use]
pub fn wrong_letters_banner(letters: &WrongLetters) -> StyledContent<String> {
    letters.banner().on(BANNER_COLOR)
}
