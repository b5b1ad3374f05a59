//! Movement directions and one-hot action decoding.

use ndarray::{Array1, ArrayD};
use serde::{Deserialize, Serialize};

/// Direction the actor travels in.
///
/// One-hot action index order is `[Up, Right, Down, Left]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in action index order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Decode a one-hot action vector.
    ///
    /// Returns `None` unless the vector is exactly one of the four canonical
    /// patterns; callers keep their previous direction in that case.
    pub fn from_one_hot(action: &[f32]) -> Option<Self> {
        let bits: Option<Vec<u8>> = action
            .iter()
            .map(|&v| {
                if v == 1.0 {
                    Some(1)
                } else if v == 0.0 {
                    Some(0)
                } else {
                    None
                }
            })
            .collect();

        match bits.as_deref() {
            Some([1, 0, 0, 0]) => Some(Direction::Up),
            Some([0, 1, 0, 0]) => Some(Direction::Right),
            Some([0, 0, 1, 0]) => Some(Direction::Down),
            Some([0, 0, 0, 1]) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Index of this direction in the one-hot action vector
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Canonical one-hot action selecting this direction
    pub fn one_hot(self) -> ArrayD<f32> {
        let mut data = vec![0.0; 4];
        data[self.index()] = 1.0;
        Array1::from(data).into_dyn()
    }

    /// Unit cell offset (dx, dy); y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_patterns() {
        assert_eq!(Direction::from_one_hot(&[1.0, 0.0, 0.0, 0.0]), Some(Direction::Up));
        assert_eq!(Direction::from_one_hot(&[0.0, 1.0, 0.0, 0.0]), Some(Direction::Right));
        assert_eq!(Direction::from_one_hot(&[0.0, 0.0, 1.0, 0.0]), Some(Direction::Down));
        assert_eq!(Direction::from_one_hot(&[0.0, 0.0, 0.0, 1.0]), Some(Direction::Left));
    }

    #[test]
    fn test_unmatched_patterns() {
        assert_eq!(Direction::from_one_hot(&[0.0; 4]), None);
        assert_eq!(Direction::from_one_hot(&[1.0, 1.0, 0.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[0.5, 0.0, 0.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[0.0, 2.0, 0.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[1.0, 0.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[0.0, 0.0, 0.0, 1.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[f32::NAN, 0.0, 0.0, 0.0]), None);
        assert_eq!(Direction::from_one_hot(&[]), None);
    }

    #[test]
    fn test_one_hot_decodes_to_self() {
        for dir in Direction::ALL {
            let action = dir.one_hot();
            assert_eq!(Direction::from_one_hot(action.as_slice().unwrap()), Some(dir));
        }
    }
}
