//! Kalaha CLI - minimax agent for the Kalaha board game
//!
//! This CLI provides:
//! - Move suggestions for a single encoded position
//! - Local games against a random or minimax opponent
//! - Play on the line-based Kalaha game server

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kalaha")]
#[command(version, about = "Minimax agent for the Kalaha board game", long_about = None)]
struct Cli {
    /// Log search details
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a position and print the best move
    Suggest(kalaha_agent::cli::commands::suggest::SuggestArgs),

    /// Play one local game against an opponent
    Play(kalaha_agent::cli::commands::play::PlayArgs),

    /// Join a game server and play until the game ends
    Connect(kalaha_agent::cli::commands::connect::ConnectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    kalaha_agent::logging::init(cli.verbose);

    match cli.command {
        Commands::Suggest(args) => kalaha_agent::cli::commands::suggest::execute(args),
        Commands::Play(args) => kalaha_agent::cli::commands::play::execute(args),
        Commands::Connect(args) => kalaha_agent::cli::commands::connect::execute(args),
    }
}
