//! Grid and coordinate value types

use serde::{Deserialize, Serialize};

/// Inclusive upper bounds for delivery coordinates.
///
/// A `5x5` grid accepts x and y values in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Maximum x (north-south axis)
    pub x: i64,
    /// Maximum y (east-west axis)
    pub y: i64,
}

impl GridDimensions {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Check a coordinate against the grid, returning the first axis that
    /// falls outside `0..=max`.
    pub fn axis_out_of_bounds(&self, coordinate: &Coordinate) -> Option<Axis> {
        if coordinate.x < 0 || coordinate.x > self.x {
            return Some(Axis::X);
        }
        if coordinate.y < 0 || coordinate.y > self.y {
            return Some(Axis::Y);
        }
        None
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.axis_out_of_bounds(coordinate).is_none()
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// A single delivery point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    /// Starting point of every route
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid axis, used to name the offending value in bounds errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}
