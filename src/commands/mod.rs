//! Command implementations

pub mod play;

pub use play::{GameResult, play_session, run_play};
