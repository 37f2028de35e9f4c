//! CLI infrastructure for the `kalaha` binary
//!
//! This module provides the subcommands for asking the agent for a move,
//! playing a local game, and joining a game server.

pub mod commands;
pub mod config;
pub mod output;
