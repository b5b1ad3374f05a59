//! Grid world configuration.

use super::CELL_SIZE;
use crate::{PathfinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`GridWorld`](super::GridWorld)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width in pixels
    pub width: i32,
    /// Grid height in pixels
    pub height: i32,
    /// Episodes are cut off once the step count exceeds this
    pub step_limit: u32,
    /// Frames per second for paced renderers (0 = unpaced)
    pub tick_rate: u32,
    /// Seed for target placement (entropy if unset)
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            step_limit: 400,
            tick_rate: 40,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Create a config with the given dimensions
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the step limit
    pub fn with_step_limit(mut self, step_limit: u32) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Set the renderer tick rate
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        (self.width - CELL_SIZE) / CELL_SIZE + 1
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        (self.height - CELL_SIZE) / CELL_SIZE + 1
    }

    /// Check that the grid can hold an actor and a distinct target
    pub fn validate(&self) -> Result<()> {
        if self.width < CELL_SIZE || self.height < CELL_SIZE {
            return Err(PathfinderError::InvalidConfig(format!(
                "grid {}x{} is smaller than one {}px cell",
                self.width, self.height, CELL_SIZE
            )));
        }
        if (self.columns() as i64) * (self.rows() as i64) < 2 {
            return Err(PathfinderError::InvalidConfig(format!(
                "grid {}x{} has a single cell; the target needs a second one",
                self.width, self.height
            )));
        }
        if self.step_limit == 0 {
            return Err(PathfinderError::InvalidConfig(
                "step_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.columns(), 32);
        assert_eq!(config.rows(), 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_grids() {
        assert!(GridConfig::new(10, 480).validate().is_err());
        assert!(GridConfig::new(20, 20).validate().is_err());
        assert!(GridConfig::new(40, 20).validate().is_ok());
        assert!(GridConfig::default().with_step_limit(0).validate().is_err());
    }

    #[test]
    fn test_from_json_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 200, "seed": 7}}"#).unwrap();

        let config = GridConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 480);
        assert_eq!(config.step_limit, 400);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_from_json_file_errors() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        assert!(matches!(
            GridConfig::from_json_file(bad.path()),
            Err(PathfinderError::ConfigParse(_))
        ));

        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        write!(invalid, r#"{{"width": 5}}"#).unwrap();
        assert!(matches!(
            GridConfig::from_json_file(invalid.path()),
            Err(PathfinderError::InvalidConfig(_))
        ));

        assert!(matches!(
            GridConfig::from_json_file("/nonexistent/pathfinder.json"),
            Err(PathfinderError::Io(_))
        ));
    }
}
