//! Grid positions.

use super::{Direction, CELL_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel-space position of a grid cell's top-left corner.
///
/// Coordinates are always multiples of [`CELL_SIZE`]. The actor may sit one
/// cell outside the grid on the step that ends its episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position from cell indices
    pub fn from_cell(col: i32, row: i32) -> Self {
        Self::new(col * CELL_SIZE, row * CELL_SIZE)
    }

    /// Cell indices (column, row)
    pub fn cell(&self) -> (i32, i32) {
        (self.x.div_euclid(CELL_SIZE), self.y.div_euclid(CELL_SIZE))
    }

    /// The neighbouring cell one step in `direction`
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * CELL_SIZE, self.y + dy * CELL_SIZE)
    }

    /// Whether the cell lies fully inside a `width` x `height` area
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x <= width - CELL_SIZE && self.y >= 0 && self.y <= height - CELL_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_by_one_cell() {
        let p = Position::new(320, 240);
        assert_eq!(p.moved(Direction::Right), Position::new(340, 240));
        assert_eq!(p.moved(Direction::Left), Position::new(300, 240));
        assert_eq!(p.moved(Direction::Down), Position::new(320, 260));
        assert_eq!(p.moved(Direction::Up), Position::new(320, 220));
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(Position::new(0, 0).in_bounds(640, 480));
        assert!(Position::new(620, 460).in_bounds(640, 480));
        assert!(!Position::new(-20, 0).in_bounds(640, 480));
        assert!(!Position::new(0, -20).in_bounds(640, 480));
        assert!(!Position::new(640, 0).in_bounds(640, 480));
        assert!(!Position::new(0, 480).in_bounds(640, 480));
    }

    #[test]
    fn test_cell_round_trip() {
        let p = Position::from_cell(3, 5);
        assert_eq!(p, Position::new(60, 100));
        assert_eq!(p.cell(), (3, 5));
        assert_eq!(Position::new(-20, 0).cell(), (-1, 0));
    }
}
