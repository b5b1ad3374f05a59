//! Bounded float observations

use super::Space;
use ndarray::ArrayD;

/// Arrays of a fixed shape whose every element lies in `[low, high]`
#[derive(Clone, Debug, PartialEq)]
pub struct Bounded {
    shape: Vec<usize>,
    /// Lower bound shared by all elements
    pub low: f32,
    /// Upper bound shared by all elements
    pub high: f32,
}

impl Bounded {
    pub fn new(shape: &[usize], low: f32, high: f32) -> Self {
        assert!(low <= high, "low {} exceeds high {}", low, high);
        Self {
            shape: shape.to_vec(),
            low,
            high,
        }
    }
}

impl Space for Bounded {
    fn contains(&self, value: &ArrayD<f32>) -> bool {
        value.shape() == self.shape.as_slice()
            && value.iter().all(|&v| v >= self.low && v <= self.high)
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }
}
