//! Agent port - abstraction over move selection strategies
//!
//! The local game driver and the server session both ask an [`Agent`] for
//! moves, so they work the same way with:
//! - The minimax search agent
//! - The random baseline

use crate::{Result, kalaha::Board, types::Slot};

/// Agent trait - unified interface for everything that picks moves
///
/// # Examples
///
/// ```no_run
/// use kalaha_agent::{kalaha::Board, ports::Agent};
///
/// fn opening_move<A: Agent>(agent: &mut A) -> kalaha_agent::Result<usize> {
///     let slot = agent.select_move(&Board::new())?;
///     Ok(slot.value())
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (finished game).
    fn select_move(&mut self, board: &Board) -> Result<Slot>;

    /// Get the agent's name.
    ///
    /// Used in logs and game summaries.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
