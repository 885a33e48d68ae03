pub mod core;
pub mod grid;
pub mod perception;
pub mod bench;
pub mod solutions;

pub use crate::core::{Axis, Cell, Color, ConcatPolicy, Connectivity, Direction, GridError, TRANSPARENT};
pub use crate::grid::{Grid, Partition};
