//! Kalaha game implementation

pub mod board;
pub mod game;

pub use board::{Board, DEFAULT_SEEDS_PER_PIT, MAX_SEEDS_PER_PIT};
pub use game::{Game, GameOutcome, Move};
