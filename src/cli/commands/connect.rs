//! Connect command - play a game on the Kalaha server

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    agents::{MinimaxAgent, RandomAgent},
    cli::{config::CommonArgs, output},
    client::{Session, SessionOutcome},
    ports::Agent,
};

#[derive(Parser, Debug)]
#[command(about = "Join a game server and play until the game ends")]
pub struct ConnectArgs {
    /// Server host (overrides the configuration file)
    #[arg(long)]
    pub host: Option<String>,

    /// Server port (overrides the configuration file)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: ConnectArgs) -> Result<()> {
    let mut config = args.common.resolve()?;
    if let Some(host) = args.host {
        config.client.host = host;
    }
    if let Some(port) = args.port {
        config.client.port = port;
    }
    config.client.validate()?;

    let address = config.client.address();
    let mut agent = MinimaxAgent::from_config(&config.agent);
    let mut fallback = RandomAgent::new();
    if let Some(seed) = config.agent.seed {
        fallback.set_rng_seed(seed);
    }
    let mut session = Session::connect(config.client)
        .with_context(|| format!("unable to connect to {address}"))?
        .with_fallback(fallback);
    let outcome = session.run(&mut agent)?;

    output::print_section("Game over");
    output::print_kv(
        "Result",
        match outcome {
            SessionOutcome::Won => "won",
            SessionOutcome::Lost => "lost",
            SessionOutcome::Draw => "draw",
        },
    );
    Ok(())
}
