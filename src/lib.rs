//! Kalaha game-playing agent
//!
//! This crate provides:
//! - A depth-limited minimax search over Kalaha game trees
//! - A complete Kalaha board implementation with text encoding
//! - Minimax and random agents behind a common [`ports::Agent`] trait
//! - A client for the line-based Kalaha game server

pub mod agents;
pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod kalaha;
pub mod logging;
pub mod ports;
pub mod search;
pub mod types;

pub use error::{Error, Result};
pub use kalaha::{Board, Game, GameOutcome};
pub use ports::{Agent, GameState};
pub use search::{SearchEngine, SearchReport};
pub use types::{Player, Slot, Utility};
