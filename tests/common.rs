//! Common test utilities for the kalaha-agent test suite.

#![allow(dead_code)]

use kalaha_agent::{Board, GameState, Player, Result, Slot};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Play `plies` random legal moves from the opening position.
///
/// Stops early if the game ends.
pub fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        let moves = board.legal_moves();
        let Some(&slot) = moves.choose(&mut rng) else {
            break;
        };
        board = board.make_move(slot).expect("legal move should apply");
    }
    board
}

/// Late endgame where player one can only play slot 3.
pub fn single_move_position() -> Board {
    Board::from_parts([0, 0, 1, 0, 0, 0], 30, [0, 0, 0, 1, 1, 0], 39, Player::One)
}

/// Minimal state with fixed stores and a list of playable slots.
///
/// Playing a slot removes it, adds its value to player one's store and one
/// seed to player two's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedState {
    pub playable: Vec<Slot>,
    pub one: i32,
    pub two: i32,
}

impl FixedState {
    pub fn terminal(one: i32, two: i32) -> Self {
        Self {
            playable: Vec::new(),
            one,
            two,
        }
    }

    pub fn with_moves(moves: &[usize]) -> Self {
        Self {
            playable: moves.iter().map(|&m| Slot::new(m).unwrap()).collect(),
            one: 0,
            two: 0,
        }
    }
}

impl GameState for FixedState {
    fn is_move_possible(&self, slot: Slot) -> bool {
        self.playable.contains(&slot)
    }

    fn apply_move(&mut self, slot: Slot) -> Result<()> {
        if !self.is_move_possible(slot) {
            return Err(kalaha_agent::Error::IllegalMove { slot: slot.value() });
        }
        self.playable.retain(|&s| s != slot);
        self.one += slot.value() as i32;
        self.two += 1;
        Ok(())
    }

    fn score_of(&self, player: Player) -> i32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }
}

/// Seeds on one side of the board.
pub fn side_total(board: &Board, player: Player) -> u32 {
    board
        .pits(player)
        .iter()
        .map(|&c| u32::from(c))
        .sum()
}

/// Straightforward recursive minimax over a [`Board`], written independently
/// of the engine's node tree.
///
/// Bounds are passed in per call and children always start from zero, with
/// ±999 as the running sentinels. Returns the backed-up utility and the move
/// that produced it.
pub fn plain_minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Slot>) {
    let moves = board.legal_moves();
    if depth == 0 || moves.is_empty() {
        let one = i32::from(board.store(Player::One));
        let two = i32::from(board.store(Player::Two));
        return (10 * one - two, None);
    }

    let mut best = if maximizing { -999 } else { 999 };
    let mut best_move = None;
    for slot in moves {
        if maximizing {
            if best > alpha {
                alpha = best;
            } else if best > beta {
                break;
            }
        } else if best < beta {
            beta = best;
        } else if best < alpha {
            break;
        }

        let next = board.make_move(slot).expect("legal move should apply");
        let (utility, _) = plain_minimax(&next, depth - 1, !maximizing, 0, 0);
        let improves = if maximizing { utility > best } else { utility < best };
        if improves {
            best = utility;
            best_move = Some(slot);
        }
    }
    (best, best_move)
}
