//! Environment traits and wrappers.
//!
//! Provides the core `Environment` trait that environments implement,
//! plus the episode statistics wrapper.

mod traits;
mod wrappers;

pub use traits::{EnvInfo, Environment, StepResult};
pub use wrappers::EpisodeStats;
