//! Commands sent to the game server and parsing of its replies

use std::fmt;

use crate::{
    Error, Result,
    types::{Player, Slot},
};

/// Prefix of every error reply.
pub const ERROR_PREFIX: &str = "ERROR";

/// Reply to a turn query while the second player has not joined yet.
pub const GAME_NOT_FULL: &str = "ERROR GAME_NOT_FULL";

/// A request line understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Join the game and learn our player number
    Hello,
    /// Ask whether the game has been decided
    Winner,
    /// Ask whose turn it is
    NextPlayer,
    /// Fetch the encoded board
    Board,
    /// Sow from `slot` as `player`
    Move { slot: Slot, player: Player },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Hello => write!(f, "HELLO"),
            Command::Winner => write!(f, "WINNER"),
            Command::NextPlayer => write!(f, "PLAYER"),
            Command::Board => write!(f, "BOARD"),
            Command::Move { slot, player } => write!(f, "MOVE {slot} {player}"),
        }
    }
}

/// Game status as reported by `WINNER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerReply {
    Winner(Player),
    Draw,
    InProgress,
}

/// Answer to `PLAYER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReply {
    ToMove(Player),
    GameNotFull,
}

pub fn is_error(reply: &str) -> bool {
    reply.trim_start().starts_with(ERROR_PREFIX)
}

/// Parse `HELLO <player>`.
pub fn parse_hello(reply: &str) -> Result<Player> {
    let mut tokens = reply.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some("HELLO"), Some(number)) => number.parse::<Player>().map_err(|_| Error::Protocol {
            command: Command::Hello.to_string(),
            message: format!("unexpected player number in '{reply}'"),
        }),
        _ => Err(Error::Protocol {
            command: Command::Hello.to_string(),
            message: format!("unexpected reply '{reply}'"),
        }),
    }
}

/// `1` or `2` name the winner and `0` is a draw; anything else means play goes on.
pub fn parse_winner(reply: &str) -> WinnerReply {
    match reply.trim() {
        "0" => WinnerReply::Draw,
        "1" => WinnerReply::Winner(Player::One),
        "2" => WinnerReply::Winner(Player::Two),
        _ => WinnerReply::InProgress,
    }
}

pub fn parse_next_player(reply: &str) -> Result<TurnReply> {
    let reply = reply.trim();
    if reply == GAME_NOT_FULL {
        return Ok(TurnReply::GameNotFull);
    }
    reply
        .parse::<Player>()
        .map(TurnReply::ToMove)
        .map_err(|_| Error::Protocol {
            command: Command::NextPlayer.to_string(),
            message: format!("unexpected reply '{reply}'"),
        })
}
