use std::fmt;

use super::types::Axis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    IndexOutOfBounds { x: usize, y: usize, width: usize, height: usize },
    DimensionMismatch { axis: Axis, dimension: &'static str, left: usize, right: usize },
    MalformedInput { row: usize, len: usize, expected: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { x, y, width, height } => {
                write!(f, "index ({}, {}) out of bounds for {}x{} grid", x, y, width, height)
            }
            Self::DimensionMismatch { axis, dimension, left, right } => {
                write!(f, "{} mismatch on {}-concat: {} vs {}", dimension, axis, left, right)
            }
            Self::MalformedInput { row, len, expected } => {
                write!(f, "malformed grid: row {} has {} cells, expected {}", row, len, expected)
            }
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
