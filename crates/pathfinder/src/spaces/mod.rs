//! Observation and action spaces.
//!
//! Describe what an environment accepts and returns. Actions are one-hot
//! vectors; observations are bounded float vectors.

mod bounded;
mod one_hot;

pub use bounded::Bounded;
pub use one_hot::OneHot;

use ndarray::ArrayD;

/// Trait for observation and action spaces
pub trait Space: Clone + Send + Sync {
    /// Check if a value is contained in this space
    fn contains(&self, value: &ArrayD<f32>) -> bool;

    /// Get the shape of values in this space
    fn shape(&self) -> &[usize];

    /// Get the total number of elements in a value
    fn num_elements(&self) -> usize {
        self.shape().iter().product()
    }
}

/// Either kind of space, as returned by `Environment`
#[derive(Clone, Debug, PartialEq)]
pub enum DynSpace {
    OneHot(OneHot),
    Bounded(Bounded),
}

impl Space for DynSpace {
    fn contains(&self, value: &ArrayD<f32>) -> bool {
        match self {
            DynSpace::OneHot(s) => s.contains(value),
            DynSpace::Bounded(s) => s.contains(value),
        }
    }

    fn shape(&self) -> &[usize] {
        match self {
            DynSpace::OneHot(s) => s.shape(),
            DynSpace::Bounded(s) => s.shape(),
        }
    }
}
