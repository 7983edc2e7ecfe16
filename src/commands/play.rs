//! Interactive game loop
//!
//! Reads one guess per line and prints clues until the word is found,
//! the player types `exit`, or input ends.

use crate::game::{GameSession, TurnOutcome, new_game};
use crate::output::{
    print_board, print_game_over, print_instant_win, print_prompt, print_rejection, print_solved,
    print_title,
};
use crate::wordlists::GameLists;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Solved after this many turns
    Won { turns: u32 },
    /// The player typed `exit` or input ran out
    Quit,
}

/// Play one game over the given input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// candidate list is empty.
pub fn run_play<R, W, G>(
    lists: &GameLists,
    rng: &mut G,
    input: R,
    out: &mut W,
) -> Result<GameResult>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut session = new_game(lists, rng).context("candidate list is empty")?;
    print_title(out)?;
    play_session(&mut session, input, out)
}

/// Drive an existing session to completion
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    mut input: R,
    out: &mut W,
) -> Result<GameResult> {
    let mut line = String::new();

    loop {
        print_prompt(out)?;
        session.start_clock();

        line.clear();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            info!("input closed");
            print_game_over(out)?;
            return Ok(GameResult::Quit);
        }

        match session.submit(&line) {
            TurnOutcome::Exit => {
                print_game_over(out)?;
                return Ok(GameResult::Quit);
            }
            TurnOutcome::Rejected(err) => print_rejection(out, &err)?,
            TurnOutcome::Miss => print_board(out, session.history(), session.wrong_letters())?,
            TurnOutcome::InstantWin => {
                print_instant_win(out, session.secret())?;
                info!(turns = 1, "game won");
                return Ok(GameResult::Won { turns: 1 });
            }
            TurnOutcome::Solved { turns, elapsed } => {
                print_solved(out, session.history(), turns, elapsed)?;
                info!(turns, seconds = elapsed.as_secs(), "game won");
                return Ok(GameResult::Won { turns });
            }
        }
    }
}
