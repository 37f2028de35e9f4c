//! Agent construction from configuration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::config::AgentConfig;
use crate::{
    Error, Result,
    agents::{MinimaxAgent, RandomAgent},
    ports::Agent,
};

/// The agent implementations the application can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Random,
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(AgentKind::Minimax),
            "random" => Ok(AgentKind::Random),
            other => Err(Error::InvalidConfiguration {
                message: format!("unknown agent '{other}'. Expected one of: minimax, random"),
            }),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Minimax => write!(f, "minimax"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

/// Builds agents, applying a default seed when the config has none.
#[derive(Debug, Clone, Default)]
pub struct App {
    default_seed: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed used for agents whose configuration does not name one.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Create an agent of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails validation.
    pub fn create_agent(&self, kind: AgentKind, config: &AgentConfig) -> Result<Box<dyn Agent>> {
        config.validate()?;
        let seed = config.seed.or(self.default_seed);
        let agent: Box<dyn Agent> = match kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::from_config(config)),
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::seeded(seed),
                None => RandomAgent::new(),
            }),
        };
        Ok(agent)
    }
}
