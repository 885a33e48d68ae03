use std::fmt;

use serde::{Deserialize, Serialize};

pub type Color = i32;

/// Reserved "no value here" marker. Never a real color.
pub const TRANSPARENT: Color = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
}

/// Neighborhood used by partitioning and flood fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Connectivity {
    /// N, S, E, W.
    #[default]
    Four,
    /// Four plus the diagonals.
    Eight,
}

/// What `concat` does when the grids disagree on the perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcatPolicy {
    /// Fail with `DimensionMismatch`.
    Strict,
    /// Pad the shorter grid with `TRANSPARENT`, top/left aligned.
    Padded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub value: Color,
    pub x: usize,
    pub y: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_defaults_to_four() {
        assert_eq!(Connectivity::default(), Connectivity::Four);
    }

    #[test]
    fn axis_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Axis::X).unwrap(), "\"x\"");
        let d: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(d, Direction::Left);
    }
}
