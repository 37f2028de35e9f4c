//! Newtype wrappers for the Kalaha domain.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Heuristic score of a position, as seen by player one.
pub type Utility = i32;

/// Number of pits on each side of the board.
pub const PITS_PER_SIDE: usize = 6;

/// A pit selection on the mover's side of the board (1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Slot(u8);

impl Slot {
    /// Every slot, in the order moves are enumerated.
    pub const ALL: [Slot; PITS_PER_SIDE] = [Slot(1), Slot(2), Slot(3), Slot(4), Slot(5), Slot(6)];

    /// Create a new slot, validating it's within the pit range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSlot`] if the value is outside 1-6.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        match u8::try_from(value) {
            Ok(v) if (1..=PITS_PER_SIDE as u8).contains(&v) => Ok(Slot(v)),
            _ => Err(crate::Error::InvalidSlot { slot: value }),
        }
    }

    /// Get the inner value.
    pub fn value(self) -> usize {
        usize::from(self.0)
    }

    /// Zero-based pit offset on the mover's side.
    pub fn index(self) -> usize {
        self.value() - 1
    }
}

impl TryFrom<usize> for Slot {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Slot::new(value)
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> Self {
        slot.value()
    }
}

impl FromStr for Slot {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|_| crate::Error::UnparsableSlot {
                input: s.to_string(),
            })?;
        Slot::new(value)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as used on the wire (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a player number.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayer`] for anything but 1 or 2.
    pub fn from_number(value: u8) -> Result<Self, crate::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(crate::Error::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Player::One),
            "2" => Ok(Player::Two),
            other => Err(crate::Error::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
