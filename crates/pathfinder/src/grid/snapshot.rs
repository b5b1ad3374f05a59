//! Read-only view of grid world state.

use super::{Direction, Position, CELL_SIZE};
use ndarray::{Array1, ArrayD};

/// Number of features in an encoded observation
pub const OBSERVATION_SIZE: usize = 8;

/// State exposed to renderers and training loops after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub actor: Position,
    pub target: Position,
    pub direction: Direction,
    pub score: u32,
    pub step_count: u32,
    pub width: i32,
    pub height: i32,
}

impl Snapshot {
    pub fn columns(&self) -> i32 {
        (self.width - CELL_SIZE) / CELL_SIZE + 1
    }

    pub fn rows(&self) -> i32 {
        (self.height - CELL_SIZE) / CELL_SIZE + 1
    }

    /// Encode as `[actor_x, actor_y, target_x, target_y]` scaled by the grid
    /// size, followed by the one-hot direction.
    pub fn to_observation(&self) -> ArrayD<f32> {
        let w = self.width as f32;
        let h = self.height as f32;

        let mut obs = Vec::with_capacity(OBSERVATION_SIZE);
        obs.extend([
            self.actor.x as f32 / w,
            self.actor.y as f32 / h,
            self.target.x as f32 / w,
            self.target.y as f32 / h,
        ]);
        obs.extend(self.direction.one_hot().iter().copied());
        Array1::from(obs).into_dyn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_encoding() {
        let snapshot = Snapshot {
            actor: Position::new(320, 240),
            target: Position::new(0, 120),
            direction: Direction::Down,
            score: 0,
            step_count: 0,
            width: 640,
            height: 480,
        };

        let obs = snapshot.to_observation();
        assert_eq!(obs.shape(), &[OBSERVATION_SIZE]);
        assert_eq!(
            obs.as_slice().unwrap(),
            &[0.5, 0.5, 0.0, 0.25, 0.0, 0.0, 1.0, 0.0]
        );
    }
}
