//! Depth-limited minimax with per-node alpha/beta bounds
//!
//! Player one is always the maximizing side at the root, and sides simply
//! alternate with depth: extra turns granted by the rules are not special-cased.
//!
//! The bounds follow a non-classical rule. Before each child is
//! played, a node compares its *own* running utility against the bounds it was
//! created with. A MAX node raises `alpha` when the running utility exceeds it
//! and otherwise stops once the running utility is above `beta`; a MIN node
//! mirrors this. Bounds are never passed down to children, which start from
//! zeroed bounds.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use super::node::{SearchNode, UTILITY_CEILING, UTILITY_FLOOR};
use crate::{
    Error, Result,
    app::AgentConfig,
    ports::GameState,
    types::{Slot, Utility},
};

/// Which perspective a node is searched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// Running utility before any child has been looked at.
    fn worst(self) -> Utility {
        match self {
            Side::Max => UTILITY_FLOOR,
            Side::Min => UTILITY_CEILING,
        }
    }

    /// Whether `candidate` strictly beats `current` for this side.
    fn prefers(self, candidate: Utility, current: Utility) -> bool {
        match self {
            Side::Max => candidate > current,
            Side::Min => candidate < current,
        }
    }
}

/// Result of searching one node: its backed-up utility and the child move
/// that produced it (`None` at leaves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub utility: Utility,
    pub best_move: Option<Slot>,
}

impl SearchOutcome {
    fn leaf(utility: Utility) -> Self {
        SearchOutcome {
            utility,
            best_move: None,
        }
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes the search entered, root included
    pub nodes: u64,
    /// Nodes statically evaluated
    pub leaves: u64,
    /// Loops cut short by the bounds
    pub cutoffs: u64,
}

/// Everything known about a finished root search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchReport {
    pub slot: Slot,
    pub utility: Utility,
    pub depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Fixed-depth move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    depth: u32,
}

impl SearchEngine {
    /// Depth used when nothing else is configured.
    pub const DEFAULT_DEPTH: u32 = 8;

    pub fn new(depth: u32) -> Self {
        SearchEngine { depth }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.depth)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Pick the move for the player to move in `state`.
    ///
    /// The caller's state is only cloned, never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if `state` has no playable slot.
    pub fn select_move<S: GameState>(&self, state: &S) -> Result<Slot> {
        Ok(self.search_root(state)?.slot)
    }

    /// Search from `state` and report the chosen move with its statistics.
    ///
    /// A depth of zero still looks one ply ahead: each root child is played
    /// and evaluated statically, so a playable slot always comes back.
    pub fn search_root<S: GameState>(&self, state: &S) -> Result<SearchReport> {
        let started = Instant::now();
        let mut root = SearchNode::root(state);
        root.expand();
        if root.is_terminal() {
            return Err(Error::NoLegalMoves);
        }

        let depth = self.depth.max(1);
        let mut stats = SearchStats::default();
        let outcome = search(depth, &mut root, Side::Max, &mut stats)?;
        let slot = outcome.best_move.ok_or(Error::NoLegalMoves)?;

        let report = SearchReport {
            slot,
            utility: outcome.utility,
            depth,
            stats,
            elapsed: started.elapsed(),
        };
        debug!(
            slot = %report.slot,
            utility = report.utility,
            depth = report.depth,
            nodes = report.stats.nodes,
            leaves = report.stats.leaves,
            cutoffs = report.stats.cutoffs,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "search finished"
        );
        Ok(report)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}

/// Search `node` to `depth` further plies from `side`'s perspective.
///
/// Leaves (depth exhausted or no playable slot) return their static
/// evaluation. Inner nodes play each child's move on the child's own state,
/// recurse with the opposite side, and keep the first strictly best reply.
///
/// # Errors
///
/// Propagates failures from applying a move to a child state.
pub fn search<S: GameState>(
    depth: u32,
    node: &mut SearchNode<S>,
    side: Side,
    stats: &mut SearchStats,
) -> Result<SearchOutcome> {
    stats.nodes += 1;
    node.expand();

    if depth == 0 || node.is_terminal() {
        stats.leaves += 1;
        return Ok(SearchOutcome::leaf(node.evaluate()));
    }

    let mut bounds = node.bounds();
    let mut best = SearchOutcome::leaf(side.worst());

    for child in node.children_mut() {
        let running = best.utility;
        let cut = match side {
            Side::Max => {
                if running > bounds.alpha {
                    bounds.alpha = running;
                    false
                } else {
                    running > bounds.beta
                }
            }
            Side::Min => {
                if running < bounds.beta {
                    bounds.beta = running;
                    false
                } else {
                    running < bounds.alpha
                }
            }
        };
        if cut {
            stats.cutoffs += 1;
            trace!(?side, running, alpha = bounds.alpha, beta = bounds.beta, "cutoff");
            break;
        }

        child.advance()?;
        let reply = search(depth - 1, child, side.opponent(), stats)?;
        if side.prefers(reply.utility, best.utility) {
            best = SearchOutcome {
                utility: reply.utility,
                best_move: child.slot(),
            };
        }
    }

    Ok(best)
}
