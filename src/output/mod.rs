//! Terminal output formatting
//!
//! Colored clue rows, banners and game messages.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_over, print_instant_win, print_prompt, print_rejection, print_solved,
    print_title,
};
