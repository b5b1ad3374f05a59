//! # Pathfinder
//!
//! A single-agent grid-world environment for reinforcement learning.
//!
//! ## Overview
//!
//! Pathfinder provides:
//! - The `Environment` trait shared by environments and wrappers
//! - `GridWorld`, a grid with one actor and one target cell
//! - Pluggable renderers that observe the state after each step
//! - Reference policies and metric loggers for evaluation loops
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pathfinder::prelude::*;
//!
//! let mut env = GridWorld::new(GridConfig::default())?;
//! let (_obs, _) = env.reset(Some(42));
//!
//! let result = env.step(&Direction::Right.one_hot());
//! assert_eq!(result.reward, 0);
//! ```

pub mod env;
pub mod grid;
pub mod log;
pub mod policy;
pub mod render;
pub mod spaces;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::env::{EnvInfo, EpisodeStats, Environment, StepResult};
    pub use crate::grid::{Direction, GridConfig, GridWorld, Position, Snapshot, CELL_SIZE};
    pub use crate::log::{CompositeLogger, ConsoleLogger, MetricLogger};
    pub use crate::policy::{GreedyPolicy, Policy, RandomPolicy};
    pub use crate::render::{AsciiRenderer, CloseHandle, NullRenderer, Renderer};
    pub use crate::spaces::{Bounded, DynSpace, OneHot, Space};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum PathfinderError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, PathfinderError>;
