//! Agent implementations
//!
//! - [`MinimaxAgent`]: fixed-depth search over the game tree
//! - [`RandomAgent`]: uniformly random legal move

pub mod minimax;
pub mod random;

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
