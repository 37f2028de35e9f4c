//! Game server client
//!
//! The server speaks a line-based text protocol: one command per line, one
//! reply line per command. [`protocol`] covers the wording, [`session`] the
//! polling loop that plays a whole game through an [`crate::ports::Agent`].

pub mod protocol;
pub mod session;

pub use protocol::{Command, TurnReply, WinnerReply};
pub use session::{Session, SessionOutcome};
