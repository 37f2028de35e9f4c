//! Suggest command - search a single position and print the chosen move

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::CommonArgs, output},
    kalaha::Board,
    search::SearchEngine,
};

#[derive(Parser, Debug)]
#[command(about = "Search a position and print the best move")]
pub struct SuggestArgs {
    /// Encoded board: 6 pits and store of player 1, 6 pits and store of
    /// player 2, next player; separated by ';'. Defaults to the opening.
    pub board: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let config = args.common.resolve()?;
    let board = match &args.board {
        Some(text) => text
            .parse::<Board>()
            .with_context(|| format!("parsing board '{text}'"))?,
        None => Board::new(),
    };

    output::print_section("Position");
    println!("{}", output::format_board(&board));

    let engine = SearchEngine::from_config(&config.agent);
    let spinner = output::create_spinner(&format!("Searching to depth {}...", engine.depth()));
    let report = engine.search_root(&board);
    spinner.finish_and_clear();
    let report = report.context("search failed")?;

    output::print_section("Search");
    output::print_report(&report);
    Ok(())
}
