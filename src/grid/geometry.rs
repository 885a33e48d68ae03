use super::Grid;
use crate::core::{Axis, Direction};

impl Grid {
    /// Quarter turn. Width and height swap.
    pub fn rotate(&self, direction: Direction) -> Grid {
        let (w, h) = (self.width, self.height);
        match direction {
            Direction::Right => Grid::from_fn(h, w, |x, y| self.cell(y, h - 1 - x)),
            Direction::Left => Grid::from_fn(h, w, |x, y| self.cell(w - 1 - y, x)),
        }
    }

    /// Mirror columns (`X`) or rows (`Y`).
    pub fn flip(&self, axis: Axis) -> Grid {
        let (w, h) = (self.width, self.height);
        match axis {
            Axis::X => Grid::from_fn(w, h, |x, y| self.cell(w - 1 - x, y)),
            Axis::Y => Grid::from_fn(w, h, |x, y| self.cell(x, h - 1 - y)),
        }
    }

    pub fn transpose(&self) -> Grid {
        Grid::from_fn(self.height, self.width, |x, y| self.cell(y, x))
    }
}
