// Immutable ARC grid.
//
// Every operation borrows `self` and returns a fresh grid; nothing here
// mutates an existing instance. Cells live in one row-major buffer and are
// addressed as (x, y) = (column, row).

mod fill;
mod geometry;
mod region;
mod scratch;
mod segment;
mod values;

pub use segment::Partition;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Color, GridError, Result, TRANSPARENT};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Builds a grid from rows. Every row must have the length of the first.
    pub fn new(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::MalformedInput { row: i, len: row.len(), expected: width });
            }
            cells.extend(row);
        }
        Ok(Self { width, height, cells })
    }

    pub fn create(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, cells: vec![fill; width * height] }
    }

    /// A grid where every cell is `TRANSPARENT`.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::create(width, height, TRANSPARENT)
    }

    /// Builds a `width` x `height` grid by evaluating `f(x, y)` in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checked single-cell read.
    pub fn at(&self, x: usize, y: usize) -> Result<Color> {
        if x >= self.width || y >= self.height {
            return Err(GridError::IndexOutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Clipped read: `TRANSPARENT` anywhere outside the extent.
    pub fn get(&self, x: isize, y: isize) -> Color {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return TRANSPARENT;
        }
        self.cells[self.index(x as usize, y as usize)]
    }

    pub fn clear(&self, fill: Color) -> Grid {
        Grid::create(self.width, self.height, fill)
    }

    pub fn equals(&self, other: &Grid) -> bool {
        self == other
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// One line per row, cells concatenated, `TRANSPARENT` drawn as `blank`.
    pub fn render(&self, blank: &str) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == TRANSPARENT { blank.to_string() } else { c.to_string() })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    fn cell(&self, x: usize, y: usize) -> Color {
        self.cells[self.index(x, y)]
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self> {
        Grid::new(rows)
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" "))
    }
}

#[cfg(test)]
pub(crate) fn sample() -> Grid {
    grid(vec![
        vec![0, 1, 2],
        vec![0, 0, 0],
        vec![3, 0, 5],
        vec![4, 0, 6],
    ])
}

#[cfg(test)]
pub(crate) fn grid(rows: Vec<Vec<Color>>) -> Grid {
    Grid::new(rows).unwrap()
}
