//! Game-state port - the capability set the search consumes

use crate::{
    Result,
    types::{Player, Slot},
};

/// Capabilities the search engine needs from a game position.
///
/// The engine never inspects pits or rules directly. It asks whether a slot
/// is playable, applies moves to its own copies, and reads the two stores.
///
/// # Cloning
///
/// `Clone` must produce a deep, independent copy. Every search node owns its
/// own clone and applies moves to it in place; a clone that shares mutable
/// data with its source would leak moves between sibling branches.
pub trait GameState: Clone {
    /// Whether the player to move may sow from `slot`.
    fn is_move_possible(&self, slot: Slot) -> bool;

    /// Apply `slot` for the player to move, mutating the state in place.
    ///
    /// Rule details such as extra turns or captures are the implementation's
    /// business.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is not possible in this state.
    fn apply_move(&mut self, slot: Slot) -> Result<()>;

    /// Seeds banked in `player`'s store.
    fn score_of(&self, player: Player) -> i32;

    /// Playable slots in enumeration order.
    fn legal_moves(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|&slot| self.is_move_possible(slot))
            .collect()
    }
}
