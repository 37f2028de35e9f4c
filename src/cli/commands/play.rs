//! Play command - one local game between the search agent and an opponent

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    app::{AgentKind, App},
    cli::{config::CommonArgs, output},
    kalaha::{Board, Game, GameOutcome, MAX_SEEDS_PER_PIT},
    ports::Agent,
    types::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play one local game against an opponent")]
pub struct PlayArgs {
    /// Opponent agent (minimax or random)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Seeds per pit at the start
    #[arg(
        long,
        default_value_t = 6,
        value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_SEEDS_PER_PIT))
    )]
    pub seeds: u16,

    /// Let the opponent move first
    #[arg(long)]
    pub second: bool,

    /// Print the board after every move
    #[arg(long)]
    pub show_board: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.common.resolve()?;
    let opponent_kind: AgentKind = args.opponent.parse()?;

    let app = App::new();
    let mut agent = app.create_agent(AgentKind::Minimax, &config.agent)?;
    let mut opponent = app.create_agent(opponent_kind, &config.agent)?;

    let (agent_player, outcome) = if args.second {
        let outcome = play_game(opponent.as_mut(), agent.as_mut(), args.seeds, args.show_board)?;
        (Player::Two, outcome)
    } else {
        let outcome = play_game(agent.as_mut(), opponent.as_mut(), args.seeds, args.show_board)?;
        (Player::One, outcome)
    };

    output::print_section("Result");
    output::print_kv("Agent plays", &format!("player {agent_player}"));
    output::print_kv("Opponent", &opponent_kind.to_string());
    output::print_kv("Outcome", verdict(outcome, agent_player));
    Ok(())
}

fn verdict(outcome: GameOutcome, agent_player: Player) -> &'static str {
    match outcome {
        GameOutcome::Draw => "draw",
        _ if outcome.is_win_for(agent_player) => "minimax agent won",
        GameOutcome::Win(_) => "minimax agent lost",
    }
}

/// Play a full game from the opening position and return its outcome.
pub fn play_game<'a>(
    first: &mut (dyn Agent + 'a),
    second: &mut (dyn Agent + 'a),
    seeds: u16,
    show_board: bool,
) -> Result<GameOutcome> {
    let mut game = Game::from_board(Board::with_seeds(seeds));
    loop {
        if let Some(outcome) = game.outcome {
            let board = game.current_state()?;
            info!(
                moves = game.moves.len(),
                store_one = board.store(Player::One),
                store_two = board.store(Player::Two),
                "game over"
            );
            return Ok(outcome);
        }

        let board = game.current_state()?;
        let mover: &mut (dyn Agent + 'a) = match board.to_move() {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let slot = mover
            .select_move(&board)
            .with_context(|| format!("{} failed to move", mover.name()))?;
        info!(player = %board.to_move(), agent = mover.name(), %slot, "move");
        game.play(slot)?;

        if show_board {
            println!("{}\n", output::format_board(&game.current_state()?));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{MinimaxAgent, RandomAgent};

    #[test]
    fn test_game_runs_to_completion() {
        let mut agent = MinimaxAgent::new(2);
        let mut opponent = RandomAgent::seeded(9);
        let outcome = play_game(&mut agent, &mut opponent, 3, false).unwrap();
        assert!(matches!(outcome, GameOutcome::Win(_) | GameOutcome::Draw));
    }

    #[test]
    fn test_verdict_is_from_the_agent_seat() {
        let one_wins = GameOutcome::Win(Player::One);
        assert_eq!(verdict(one_wins, Player::One), "minimax agent won");
        assert_eq!(verdict(one_wins, Player::Two), "minimax agent lost");
        assert_eq!(verdict(GameOutcome::Draw, Player::Two), "draw");
    }
}
