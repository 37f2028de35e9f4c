//! Configuration resolution shared across commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppConfig;

/// Options every command that builds an agent accepts
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Search depth (overrides the configuration file)
    #[arg(long, short = 'd')]
    pub depth: Option<u32>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Load the configuration file, if any, and apply command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load(path)?,
            None => AppConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.agent.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.agent.seed = Some(seed);
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn load(path: &Path) -> Result<AppConfig> {
    AppConfig::load(path).with_context(|| format!("loading configuration from {}", path.display()))
}
