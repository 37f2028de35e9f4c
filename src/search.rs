//! Game-tree search
//!
//! [`SearchNode`] holds one explored position; [`SearchEngine`] runs the
//! depth-limited minimax over a tree of them and returns the best root move.

pub mod engine;
pub mod node;

pub use engine::{SearchEngine, SearchOutcome, SearchReport, SearchStats, Side, search};
pub use node::{Bounds, SearchNode, UTILITY_CEILING, UTILITY_FLOOR, utility_of};
