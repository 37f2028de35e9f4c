//! Board state representation and sowing rules

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::game::GameOutcome;
use crate::{
    Error, Result,
    ports::GameState,
    types::{PITS_PER_SIDE, Player, Slot},
};

/// Seeds placed in every pit at the start of a standard game.
pub const DEFAULT_SEEDS_PER_PIT: u16 = 6;

/// Largest opening pit size whose total still fits a single cell.
pub const MAX_SEEDS_PER_PIT: u16 = u16::MAX / (2 * PITS_PER_SIDE as u16);

/// Any one cell may end up holding every seed on the board.
const MAX_TOTAL_SEEDS: u32 = u16::MAX as u32;

const STORE_ONE: usize = PITS_PER_SIDE;
const STORE_TWO: usize = 2 * PITS_PER_SIDE + 1;
const RING: usize = 2 * PITS_PER_SIDE + 2;

/// Fields in the text encoding: two sides of pits, two stores, next player.
const ENCODED_FIELDS: usize = RING + 1;

/// Complete Kalaha position: pits, stores, and whose turn it is.
///
/// Cells are laid out in sowing order. Player one's pits occupy 0-5 with the
/// store at 6; player two's pits occupy 7-12 with the store at 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u16; RING],
    to_move: Player,
}

impl Board {
    /// Create the standard opening position with player one to move.
    pub fn new() -> Self {
        Self::with_seeds(DEFAULT_SEEDS_PER_PIT)
    }

    /// Create an opening position with `seeds` in every pit.
    ///
    /// `seeds` must not exceed [`MAX_SEEDS_PER_PIT`].
    pub fn with_seeds(seeds: u16) -> Self {
        let mut cells = [seeds; RING];
        cells[STORE_ONE] = 0;
        cells[STORE_TWO] = 0;
        Board {
            cells,
            to_move: Player::One,
        }
    }

    /// Build a position from explicit pit and store contents.
    ///
    /// Pits are listed from slot 1 to slot 6 for each player.
    pub fn from_parts(
        pits_one: [u16; PITS_PER_SIDE],
        store_one: u16,
        pits_two: [u16; PITS_PER_SIDE],
        store_two: u16,
        to_move: Player,
    ) -> Self {
        let mut cells = [0; RING];
        cells[..STORE_ONE].copy_from_slice(&pits_one);
        cells[STORE_ONE] = store_one;
        cells[STORE_ONE + 1..STORE_TWO].copy_from_slice(&pits_two);
        cells[STORE_TWO] = store_two;
        Board { cells, to_move }
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Seeds in `player`'s store.
    pub fn store(&self, player: Player) -> u16 {
        self.cells[store_index(player)]
    }

    /// Seeds in `player`'s pits, slot 1 first.
    pub fn pits(&self, player: Player) -> [u16; PITS_PER_SIDE] {
        let start = pit_index(player, Slot::ALL[0]);
        let mut pits = [0; PITS_PER_SIDE];
        pits.copy_from_slice(&self.cells[start..start + PITS_PER_SIDE]);
        pits
    }

    /// Seeds in the pit `slot` on `player`'s side.
    pub fn seeds_at(&self, player: Player, slot: Slot) -> u16 {
        self.cells[pit_index(player, slot)]
    }

    /// Total seeds on the board, stores included. Sowing never changes it.
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&c| u32::from(c)).sum()
    }

    /// The game ends as soon as the player to move has nothing to sow.
    pub fn is_game_over(&self) -> bool {
        self.side_is_empty(self.to_move)
    }

    /// Outcome of a finished game, `None` while play continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        // Seeds still on the other side belong to their owner.
        let mut one = u32::from(self.store(Player::One));
        let mut two = u32::from(self.store(Player::Two));
        let remaining: u32 = self
            .pits(self.to_move.opponent())
            .iter()
            .map(|&c| u32::from(c))
            .sum();
        match self.to_move.opponent() {
            Player::One => one += remaining,
            Player::Two => two += remaining,
        }
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameOutcome::Win(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Win(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }

    /// Apply a move and return the resulting board, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the pit is empty or the game is over.
    pub fn make_move(&self, slot: Slot) -> Result<Board> {
        let mut next = *self;
        next.sow(slot)?;
        Ok(next)
    }

    fn side_is_empty(&self, player: Player) -> bool {
        self.pits(player).iter().all(|&c| c == 0)
    }

    fn sow(&mut self, slot: Slot) -> Result<()> {
        let mover = self.to_move;
        let start = pit_index(mover, slot);
        let mut seeds = self.cells[start];
        if seeds == 0 || self.is_game_over() {
            return Err(Error::IllegalMove { slot: slot.value() });
        }

        self.cells[start] = 0;
        let skipped = store_index(mover.opponent());
        let mut cursor = start;
        while seeds > 0 {
            cursor = (cursor + 1) % RING;
            if cursor == skipped {
                continue;
            }
            self.cells[cursor] += 1;
            seeds -= 1;
        }

        let own_store = store_index(mover);
        if cursor != own_store {
            if owns_pit(mover, cursor) && self.cells[cursor] == 1 {
                let opposite = opposite_pit(cursor);
                if self.cells[opposite] > 0 {
                    let captured = self.cells[opposite] + 1;
                    self.cells[opposite] = 0;
                    self.cells[cursor] = 0;
                    self.cells[own_store] += captured;
                }
            }
            self.to_move = mover.opponent();
        }

        if self.is_game_over() {
            self.collect_remaining();
        }
        Ok(())
    }

    /// Move the seeds left on the waiting player's side into their store.
    fn collect_remaining(&mut self) {
        let owner = self.to_move.opponent();
        let start = pit_index(owner, Slot::ALL[0]);
        let remaining: u16 = self.cells[start..start + PITS_PER_SIDE].iter().sum();
        self.cells[start..start + PITS_PER_SIDE].fill(0);
        self.cells[store_index(owner)] += remaining;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Board {
    fn is_move_possible(&self, slot: Slot) -> bool {
        !self.is_game_over() && self.seeds_at(self.to_move, slot) > 0
    }

    fn apply_move(&mut self, slot: Slot) -> Result<()> {
        self.sow(slot)
    }

    fn score_of(&self, player: Player) -> i32 {
        i32::from(self.store(player))
    }
}

fn pit_index(player: Player, slot: Slot) -> usize {
    match player {
        Player::One => slot.index(),
        Player::Two => STORE_ONE + 1 + slot.index(),
    }
}

fn store_index(player: Player) -> usize {
    match player {
        Player::One => STORE_ONE,
        Player::Two => STORE_TWO,
    }
}

fn owns_pit(player: Player, cell: usize) -> bool {
    match player {
        Player::One => cell < STORE_ONE,
        Player::Two => cell > STORE_ONE && cell < STORE_TWO,
    }
}

fn opposite_pit(cell: usize) -> usize {
    2 * PITS_PER_SIDE - cell
}

impl fmt::Display for Board {
    /// Wire encoding: pits and store of player one, pits and store of
    /// player two, then the player to move, separated by `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell};")?;
        }
        write!(f, "{}", self.to_move)
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBoardEncoding {
            input: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.trim().split(';').map(str::trim).collect();
        if fields.len() != ENCODED_FIELDS {
            return Err(invalid(format!(
                "expected {ENCODED_FIELDS} fields, got {}",
                fields.len()
            )));
        }

        let mut cells = [0; RING];
        for (i, field) in fields[..RING].iter().enumerate() {
            cells[i] = field
                .parse::<u16>()
                .map_err(|_| invalid(format!("field {} ('{field}') is not a seed count", i + 1)))?;
        }
        let to_move = fields[RING]
            .parse::<Player>()
            .map_err(|_| invalid(format!("unknown player '{}'", fields[RING])))?;

        let board = Board { cells, to_move };
        if board.total_seeds() > MAX_TOTAL_SEEDS {
            return Err(invalid(format!(
                "{} seeds in total, at most {MAX_TOTAL_SEEDS} are supported",
                board.total_seeds()
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: usize) -> Slot {
        Slot::new(n).unwrap()
    }

    #[test]
    fn test_opening_position() {
        let board = Board::new();
        assert_eq!(board.pits(Player::One), [6; 6]);
        assert_eq!(board.pits(Player::Two), [6; 6]);
        assert_eq!(board.store(Player::One), 0);
        assert_eq!(board.total_seeds(), 72);
        assert_eq!(board.legal_moves(), Slot::ALL.to_vec());
    }

    #[test]
    fn test_sowing_into_store_grants_extra_turn() {
        // Slot 1 holds 6 seeds: five pits then the store.
        let board = Board::new().make_move(slot(1)).unwrap();
        assert_eq!(board.store(Player::One), 1);
        assert_eq!(board.pits(Player::One), [0, 7, 7, 7, 7, 7]);
        assert_eq!(board.to_move(), Player::One);
    }

    #[test]
    fn test_sowing_passes_turn() {
        let board = Board::new().make_move(slot(2)).unwrap();
        assert_eq!(board.pits(Player::One), [6, 0, 7, 7, 7, 7]);
        assert_eq!(board.store(Player::One), 1);
        assert_eq!(board.pits(Player::Two), [7, 6, 6, 6, 6, 6]);
        assert_eq!(board.to_move(), Player::Two);
    }

    #[test]
    fn test_sowing_skips_opponent_store() {
        // 13 seeds from player one's slot 1 loop the whole ring once.
        let board = Board::from_parts([13, 0, 0, 0, 0, 1], 0, [1; 6], 0, Player::One);
        let next = board.make_move(slot(1)).unwrap();
        assert_eq!(next.store(Player::Two), 0);
        assert_eq!(next.total_seeds(), board.total_seeds());
    }

    #[test]
    fn test_capture_into_empty_own_pit() {
        // One seed from slot 1 lands in empty slot 2; opposite pit is player two's slot 5.
        let board = Board::from_parts([1, 0, 0, 0, 0, 3], 0, [2, 2, 2, 2, 4, 2], 0, Player::One);
        let next = board.make_move(slot(1)).unwrap();
        assert_eq!(next.store(Player::One), 5);
        assert_eq!(next.seeds_at(Player::One, slot(2)), 0);
        assert_eq!(next.seeds_at(Player::Two, slot(5)), 0);
        assert_eq!(next.to_move(), Player::Two);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let board = Board::from_parts([1, 0, 0, 0, 0, 3], 0, [2, 2, 2, 2, 0, 2], 0, Player::One);
        let next = board.make_move(slot(1)).unwrap();
        assert_eq!(next.store(Player::One), 0);
        assert_eq!(next.seeds_at(Player::One, slot(2)), 1);
    }

    #[test]
    fn test_empty_pit_is_illegal() {
        let board = Board::from_parts([0, 1, 1, 1, 1, 1], 0, [1; 6], 0, Player::One);
        assert!(!board.is_move_possible(slot(1)));
        assert!(matches!(
            board.make_move(slot(1)),
            Err(Error::IllegalMove { slot: 1 })
        ));
    }

    #[test]
    fn test_game_ends_and_collects_remaining() {
        // Player one's last seed goes into the store, leaving their side empty.
        let board = Board::from_parts([0, 0, 0, 0, 0, 1], 20, [3, 0, 0, 0, 0, 2], 10, Player::One);
        let next = board.make_move(slot(6)).unwrap();
        assert!(next.is_game_over());
        assert_eq!(next.store(Player::One), 21);
        assert_eq!(next.store(Player::Two), 15);
        assert_eq!(next.legal_moves(), Vec::<Slot>::new());
        assert_eq!(next.outcome(), Some(GameOutcome::Win(Player::One)));
    }

    #[test]
    fn test_encoding_round_trip() {
        let board = Board::new().make_move(slot(3)).unwrap();
        let text = board.to_string();
        assert_eq!(text, "6;6;0;7;7;7;1;7;7;6;6;6;6;0;2");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_encoding_rejects_malformed_input() {
        assert!("1;2;3".parse::<Board>().is_err());
        assert!("6;6;6;6;6;6;0;6;6;6;6;6;6;0;3".parse::<Board>().is_err());
        assert!("6;6;x;6;6;6;0;6;6;6;6;6;6;0;1".parse::<Board>().is_err());
    }

    #[test]
    fn test_encoding_rejects_seed_total_beyond_cell_capacity() {
        let err = "0;0;0;0;0;1;65535;1;1;1;1;1;1;0;1".parse::<Board>().unwrap_err();
        assert!(matches!(err, Error::InvalidBoardEncoding { .. }));

        // Exactly at capacity still parses and can be played to the end.
        let board: Board = "0;0;0;0;0;1;65528;1;1;1;1;1;1;0;1".parse().unwrap();
        assert_eq!(board.total_seeds(), 65535);
        let next = board.make_move(slot(6)).unwrap();
        assert_eq!(next.total_seeds(), 65535);
    }

    #[test]
    fn test_largest_opening_position_plays() {
        let board = Board::with_seeds(MAX_SEEDS_PER_PIT);
        assert!(board.total_seeds() <= MAX_TOTAL_SEEDS);
        let next = board.make_move(slot(1)).unwrap();
        assert_eq!(next.total_seeds(), board.total_seeds());
    }
}
