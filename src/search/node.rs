//! Search tree nodes: expansion and static evaluation

use crate::{
    Result,
    ports::GameState,
    types::{Player, Slot, Utility},
};

/// Running utility a MAX node starts from, below any reachable score.
pub const UTILITY_FLOOR: Utility = i32::MIN;

/// Running utility a MIN node starts from, above any reachable score.
pub const UTILITY_CEILING: Utility = i32::MAX;

/// Weight of player one's store in the heuristic.
const OWN_STORE_WEIGHT: i32 = 10;

/// Pruning bounds carried by a single node.
///
/// Only the root is opened with the sentinels; every child starts from
/// [`Bounds::default`] (both zero) rather than from its parent's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub alpha: Utility,
    pub beta: Utility,
}

impl Bounds {
    /// Bounds with no constraint in either direction.
    pub fn open() -> Self {
        Bounds {
            alpha: UTILITY_FLOOR,
            beta: UTILITY_CEILING,
        }
    }
}

/// Static evaluation: player one's store counts ten times player two's.
pub fn utility_of<S: GameState>(state: &S) -> Utility {
    OWN_STORE_WEIGHT * state.score_of(Player::One) - state.score_of(Player::Two)
}

/// One position in the explored game tree.
///
/// A child is created holding an unplayed copy of its parent's state. The
/// search calls [`SearchNode::advance`] right before descending into it.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    state: S,
    slot: Option<Slot>,
    children: Vec<SearchNode<S>>,
    expanded: bool,
    terminal: bool,
    advanced: bool,
    bounds: Bounds,
}

impl<S: GameState> SearchNode<S> {
    /// Root node owning a copy of the caller's position.
    pub fn root(state: &S) -> Self {
        SearchNode {
            state: state.clone(),
            slot: None,
            children: Vec::new(),
            expanded: false,
            terminal: false,
            advanced: true,
            bounds: Bounds::open(),
        }
    }

    fn child(state: S, slot: Slot) -> Self {
        SearchNode {
            state,
            slot: Some(slot),
            children: Vec::new(),
            expanded: false,
            terminal: false,
            advanced: false,
            bounds: Bounds::default(),
        }
    }

    /// Create one child per playable slot, in slot order.
    ///
    /// Runs once; later calls leave the node as it is.
    pub fn expand(&mut self) {
        if self.expanded {
            return;
        }
        for slot in Slot::ALL {
            if self.state.is_move_possible(slot) {
                self.children.push(SearchNode::child(self.state.clone(), slot));
            }
        }
        self.terminal = self.children.is_empty();
        self.expanded = true;
    }

    /// Apply this node's move to its own state copy.
    ///
    /// Roots and already advanced nodes are left unchanged.
    pub fn advance(&mut self) -> Result<()> {
        if self.advanced {
            return Ok(());
        }
        if let Some(slot) = self.slot {
            self.state.apply_move(slot)?;
        }
        self.advanced = true;
        Ok(())
    }

    /// Heuristic utility of this node's position.
    pub fn evaluate(&self) -> Utility {
        utility_of(&self.state)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// The move that led here from the parent, `None` at the root.
    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub fn children(&self) -> &[SearchNode<S>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [SearchNode<S>] {
        &mut self.children
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True once expansion found no playable slot.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
