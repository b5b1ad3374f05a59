//! Shared command-line arguments.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pathfinder::grid::GridConfig;
use pathfinder::policy::{GreedyPolicy, Policy, RandomPolicy};
use std::path::PathBuf;

/// Grid settings; flags override values loaded from `--config`
#[derive(Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height in pixels
    #[arg(long)]
    pub height: Option<i32>,

    /// Maximum steps per episode
    #[arg(long)]
    pub step_limit: Option<u32>,

    /// Frames per second when rendering (0 = unpaced)
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GridArgs {
    pub fn resolve(&self) -> Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => GridConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GridConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(step_limit) = self.step_limit {
            config.step_limit = step_limit;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Built-in policies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Walk straight at the target
    Greedy,
    /// Uniformly random directions
    Random,
}

impl PolicyKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Greedy => Box::new(GreedyPolicy),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}
