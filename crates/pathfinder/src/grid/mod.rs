//! Grid world environment.
//!
//! A fixed-size grid holding one actor cell and one target cell. Positions
//! are pixel coordinates on a lattice of [`CELL_SIZE`] spacing.

mod config;
mod direction;
mod position;
mod snapshot;
mod world;

pub use config::GridConfig;
pub use direction::Direction;
pub use position::Position;
pub use snapshot::{Snapshot, OBSERVATION_SIZE};
pub use world::{GridWorld, END_REWARD, TARGET_REWARD};

/// Lattice spacing in pixels
pub const CELL_SIZE: i32 = 20;
