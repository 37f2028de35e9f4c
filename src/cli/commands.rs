//! Subcommands of the `kalaha` binary

pub mod connect;
pub mod play;
pub mod suggest;
