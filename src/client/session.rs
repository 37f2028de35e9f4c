//! Polling session that plays one game against the server

use std::{
    io::{BufRead, BufReader, Write},
    net::TcpStream,
    thread,
    time::Instant,
};

use tracing::{debug, info, warn};

use super::protocol::{self, Command, TurnReply, WinnerReply};
use crate::{
    Error, Result,
    agents::RandomAgent,
    app::ClientConfig,
    kalaha::Board,
    ports::Agent,
    types::Player,
};

/// Consecutive turns the server may hand us on a board with no legal move.
const MAX_STALLED_TURNS: u32 = 10;

/// How a finished session ended for us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    Draw,
}

/// Connection to the game server over any line-oriented transport.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    config: ClientConfig,
    player: Option<Player>,
    fallback: RandomAgent,
    stalled_turns: u32,
}

impl Session<BufReader<TcpStream>, TcpStream> {
    /// Open a TCP connection to the configured server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the connection cannot be established.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let address = config.address();
        info!(%address, "connecting");
        let stream = TcpStream::connect(&address)
            .map_err(|e| Error::io(format!("connect to {address}"), e))?;
        let reader = BufReader::new(
            stream
                .try_clone()
                .map_err(|e| Error::io("clone socket", e))?,
        );
        Ok(Self::new(reader, stream, config))
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: ClientConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            player: None,
            fallback: RandomAgent::new(),
            stalled_turns: 0,
        }
    }

    /// Replace the agent used after the server rejects a move.
    pub fn with_fallback(mut self, fallback: RandomAgent) -> Self {
        self.fallback = fallback;
        self
    }

    /// Our player number, once the server has told us.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// Consume the session, returning the writer (useful to inspect what was sent).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Poll until the server declares a result.
    pub fn run(&mut self, agent: &mut dyn Agent) -> Result<SessionOutcome> {
        loop {
            if let Some(outcome) = self.step(agent)? {
                return Ok(outcome);
            }
            thread::sleep(self.config.poll_interval());
        }
    }

    /// One polling round: identify if needed, check for a result, and move
    /// if it is our turn.
    pub fn step(&mut self, agent: &mut dyn Agent) -> Result<Option<SessionOutcome>> {
        let player = match self.player {
            Some(player) => player,
            None => self.identify()?,
        };

        let reply = self.request(Command::Winner)?;
        match protocol::parse_winner(&reply) {
            WinnerReply::Winner(winner) if winner == player => {
                info!("I won!");
                return Ok(Some(SessionOutcome::Won));
            }
            WinnerReply::Winner(_) => {
                info!("I lost...");
                return Ok(Some(SessionOutcome::Lost));
            }
            WinnerReply::Draw => {
                info!("Even game!");
                return Ok(Some(SessionOutcome::Draw));
            }
            WinnerReply::InProgress => {}
        }

        let reply = self.request(Command::NextPlayer)?;
        match protocol::parse_next_player(&reply)? {
            TurnReply::ToMove(next) if next == player => self.take_turn(player, agent)?,
            TurnReply::ToMove(_) => {}
            TurnReply::GameNotFull => debug!("waiting for opponent"),
        }
        Ok(None)
    }

    fn identify(&mut self) -> Result<Player> {
        let reply = self.request(Command::Hello)?;
        let player = protocol::parse_hello(&reply)?;
        info!(%player, "I am player {player}");
        self.player = Some(player);
        Ok(player)
    }

    fn take_turn(&mut self, player: Player, agent: &mut dyn Agent) -> Result<()> {
        let encoded = self.request(Command::Board)?;
        let board: Board = encoded.parse()?;

        let started = Instant::now();
        let mut slot = match agent.select_move(&board) {
            Ok(slot) => slot,
            Err(Error::NoLegalMoves) => {
                self.stalled_turns += 1;
                if self.stalled_turns >= MAX_STALLED_TURNS {
                    return Err(Error::Protocol {
                        command: "BOARD".to_string(),
                        message: format!(
                            "our turn {} times in a row on a board with no legal move",
                            self.stalled_turns
                        ),
                    });
                }
                warn!(board = %board, "no legal move on our turn; waiting for result");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.stalled_turns = 0;

        let attempts = self.config.max_move_retries + 1;
        for attempt in 1..=attempts {
            let reply = self.request(Command::Move { slot, player })?;
            if !protocol::is_error(&reply) {
                info!(
                    agent = agent.name(),
                    "Made move {slot} in {:.3} secs",
                    started.elapsed().as_secs_f64()
                );
                return Ok(());
            }
            warn!(%slot, attempt, %reply, "move rejected");
            if attempt < attempts {
                slot = self.fallback.select_move(&board)?;
            }
        }

        Err(Error::Protocol {
            command: "MOVE".to_string(),
            message: format!("server rejected {attempts} consecutive moves"),
        })
    }

    fn request(&mut self, command: Command) -> Result<String> {
        let line = command.to_string();
        writeln!(self.writer, "{line}").map_err(|e| Error::io(format!("send {line}"), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("send {line}"), e))?;

        let mut reply = String::new();
        let read = self
            .reader
            .read_line(&mut reply)
            .map_err(|e| Error::io(format!("read reply to {line}"), e))?;
        if read == 0 {
            return Err(Error::Protocol {
                command: line,
                message: "connection closed by server".to_string(),
            });
        }
        let reply = reply.trim_end().to_string();
        debug!(command = %line, %reply, "exchange");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::agents::MinimaxAgent;

    fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let config = ClientConfig::default().with_poll_interval_ms(0);
        Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), config)
            .with_fallback(RandomAgent::seeded(5))
    }

    fn sent(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> Vec<String> {
        String::from_utf8(session.into_writer())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_waits_for_opponent_then_reports_result() {
        let mut s = session("HELLO 1\n-1\nERROR GAME_NOT_FULL\n-1\n2\n2\n");
        let mut agent = MinimaxAgent::new(2);
        let outcome = s.run(&mut agent).unwrap();
        assert_eq!(outcome, SessionOutcome::Lost);
        assert_eq!(s.player(), Some(Player::One));
        assert_eq!(
            sent(s),
            vec!["HELLO", "WINNER", "PLAYER", "WINNER", "PLAYER", "WINNER"]
        );
    }

    #[test]
    fn test_moves_on_our_turn() {
        let board = Board::new().to_string();
        let script = format!("HELLO 1\n-1\n1\n{board}\nOK\n1\n");
        let mut s = session(&script);
        let mut agent = MinimaxAgent::new(2);
        assert_eq!(s.run(&mut agent).unwrap(), SessionOutcome::Won);

        let lines = sent(s);
        assert_eq!(lines[3], "BOARD");
        assert!(lines[4].starts_with("MOVE "));
        assert!(lines[4].ends_with(" 1"));
    }

    #[test]
    fn test_rejected_moves_exhaust_retries() {
        let board = Board::new().to_string();
        let script = format!(
            "HELLO 2\n-1\n2\n{board}\nERROR\nERROR\nERROR\nERROR\n"
        );
        let mut s = session(&script);
        let mut agent = MinimaxAgent::new(1);
        let err = s.run(&mut agent).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
        assert!(err.to_string().contains("rejected 4 consecutive moves"));
    }

    #[test]
    fn test_single_attempt_sends_one_move() {
        let board = Board::new().to_string();
        let script = format!("HELLO 1\n-1\n1\n{board}\nERROR\n");
        let config = ClientConfig::default()
            .with_poll_interval_ms(0)
            .with_max_move_retries(0);
        let mut s = Session::new(Cursor::new(script.into_bytes()), Vec::new(), config)
            .with_fallback(RandomAgent::seeded(5));
        let mut agent = MinimaxAgent::new(1);
        assert!(matches!(s.step(&mut agent), Err(Error::Protocol { .. })));

        let moves = sent(s).iter().filter(|l| l.starts_with("MOVE ")).count();
        assert_eq!(moves, 1);
    }

    #[test]
    fn test_repeated_turns_without_moves_give_up() {
        let finished = Board::from_parts([0; 6], 36, [0; 6], 36, Player::One).to_string();
        let mut script = String::from("HELLO 1\n");
        for _ in 0..MAX_STALLED_TURNS {
            script.push_str(&format!("-1\n1\n{finished}\n"));
        }
        let mut s = session(&script);
        let mut agent = MinimaxAgent::new(1);
        let err = s.run(&mut agent).unwrap_err();
        assert!(matches!(&err, Error::Protocol { command, .. } if command == "BOARD"));

        let boards = sent(s).iter().filter(|l| *l == "BOARD").count();
        assert_eq!(boards as u32, MAX_STALLED_TURNS);
    }

    #[test]
    fn test_closed_connection_is_an_error() {
        let mut s = session("HELLO 1\n");
        let mut agent = MinimaxAgent::new(1);
        assert!(matches!(
            s.step(&mut agent),
            Err(Error::Protocol { .. })
        ));
    }
}
