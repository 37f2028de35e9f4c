//! Search-backed agent

use crate::{
    Result,
    app::AgentConfig,
    kalaha::Board,
    ports::Agent,
    search::{SearchEngine, SearchReport},
    types::Slot,
};

/// Agent that picks moves with [`SearchEngine`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    engine: SearchEngine,
    last_report: Option<SearchReport>,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self {
            engine: SearchEngine::new(depth),
            last_report: None,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self {
            engine: SearchEngine::from_config(config),
            last_report: None,
        }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Report of the most recent successful search.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Slot> {
        let report = self.engine.search_root(board)?;
        self.last_report = Some(report);
        Ok(report.slot)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
