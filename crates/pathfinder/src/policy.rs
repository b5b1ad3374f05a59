//! Reference policies for driving a grid world without a learner.
//!
//! - `RandomPolicy` - uniform one-hot actions, a baseline for evaluation
//! - `GreedyPolicy` - walks straight at the target, never leaves the grid

use crate::grid::{Direction, Snapshot};
use crate::spaces::OneHot;
use ndarray::ArrayD;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Trait for policies that choose an action from the latest snapshot
pub trait Policy: Send {
    /// Return a one-hot action vector
    fn act(&mut self, snapshot: &Snapshot) -> ArrayD<f32>;
}

/// Uniformly random one-hot actions
pub struct RandomPolicy {
    space: OneHot,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            space: OneHot::new(Direction::ALL.len()),
            rng,
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _snapshot: &Snapshot) -> ArrayD<f32> {
        self.space.sample(&mut self.rng)
    }
}

/// Closes the horizontal gap first, then the vertical one
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Direction that brings the actor one cell closer to the target
    pub fn choose(snapshot: &Snapshot) -> Direction {
        let dx = snapshot.target.x - snapshot.actor.x;
        let dy = snapshot.target.y - snapshot.actor.y;

        if dx > 0 {
            Direction::Right
        } else if dx < 0 {
            Direction::Left
        } else if dy > 0 {
            Direction::Down
        } else if dy < 0 {
            Direction::Up
        } else {
            snapshot.direction
        }
    }
}

impl Policy for GreedyPolicy {
    fn act(&mut self, snapshot: &Snapshot) -> ArrayD<f32> {
        Self::choose(snapshot).one_hot()
    }
}
