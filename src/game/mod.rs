//! Game state and rules

mod session;

pub use session::{EXIT_COMMAND, GameSession, GuessError, TurnOutcome, WrongLetters};

use crate::wordlists::GameLists;
use rand::Rng;

/// Start a game with a secret drawn uniformly from the candidate list
///
/// Returns `None` only if the candidate list is empty, which loaded
/// lists never are.
pub fn new_game<'a, R: Rng + ?Sized>(
    lists: &'a GameLists,
    rng: &mut R,
) -> Option<GameSession<'a>> {
    let secret = lists.candidates.choose(rng)?.clone();
    Some(GameSession::new(&lists.words, secret))
}
