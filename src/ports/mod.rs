//! Ports (trait boundaries) for the game-state collaborator and move selectors.
//!
//! The search core owns these traits; the concrete board and the agents are
//! adapters that implement them.

pub mod agent;
pub mod state;

pub use agent::Agent;
pub use state::GameState;
