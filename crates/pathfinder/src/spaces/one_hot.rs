//! One-hot action space

use super::Space;
use ndarray::{Array1, ArrayD};
use rand::Rng;

/// One-hot space over n categories: vectors of length n with a single 1.0
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneHot {
    n: usize,
    /// Cached shape
    shape: Vec<usize>,
}

impl OneHot {
    /// Create a new one-hot space with n categories
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "OneHot space must have at least 1 category");
        Self { n, shape: vec![n] }
    }

    /// Number of categories
    pub fn n(&self) -> usize {
        self.n
    }

    /// Encode a category index as a one-hot vector
    pub fn encode(&self, index: usize) -> ArrayD<f32> {
        assert!(
            index < self.n,
            "index {} out of range for {} categories",
            index,
            self.n()
        );
        let mut data = vec![0.0; self.n()];
        data[index] = 1.0;
        Array1::from(data).into_dyn()
    }

    /// Uniformly random one-hot vector
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ArrayD<f32> {
        self.encode(rng.gen_range(0..self.n))
    }

    /// Decode a one-hot vector back to its category index
    pub fn decode(&self, value: &ArrayD<f32>) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        value.iter().position(|&v| v == 1.0)
    }
}

impl Space for OneHot {
    fn contains(&self, value: &ArrayD<f32>) -> bool {
        if value.shape() != self.shape.as_slice() {
            return false;
        }
        let ones = value.iter().filter(|&&v| v == 1.0).count();
        let zeros = value.iter().filter(|&&v| v == 0.0).count();
        ones == 1 && ones + zeros == value.len()
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;
    use rand::SeedableRng;

    #[test]
    fn test_one_hot_encode_decode() {
        let space = OneHot::new(4);
        let v = space.encode(2);
        assert_eq!(v.as_slice().unwrap(), &[0.0, 0.0, 1.0, 0.0]);
        assert_eq!(space.decode(&v), Some(2));
    }

    #[test]
    fn test_one_hot_contains() {
        let space = OneHot::new(4);
        let zero = ArrayD::zeros(IxDyn(&[4]));
        let double = ArrayD::from_shape_vec(IxDyn(&[4]), vec![1.0, 1.0, 0.0, 0.0]).unwrap();
        let fuzzy = ArrayD::from_shape_vec(IxDyn(&[4]), vec![0.9, 0.0, 0.0, 0.0]).unwrap();
        let short = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 0.0, 0.0]).unwrap();

        assert!(!space.contains(&zero));
        assert!(!space.contains(&double));
        assert!(!space.contains(&fuzzy));
        assert!(!space.contains(&short));
        assert_eq!(space.decode(&double), None);
    }

    #[test]
    fn test_one_hot_sample() {
        let space = OneHot::new(4);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let sample = space.sample(&mut rng);
            assert!(space.contains(&sample));
            seen[space.decode(&sample).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "at least 1 category")]
    fn test_one_hot_empty_panics() {
        OneHot::new(0);
    }
}
