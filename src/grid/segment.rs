// Connected-component segmentation.
//
// Components are discovered in row-major order and grown depth-first with
// an explicit stack, so deep components never hit the call-stack limit.

use serde::{Deserialize, Serialize};

use super::scratch::Visited;
use super::Grid;
use crate::core::{Color, Connectivity, TRANSPARENT};

/// One connected component, cropped to its bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Component cells; everything else in the box is `TRANSPARENT`.
    pub grid: Grid,
    /// Top-left corner of the box in the source grid.
    pub x: usize,
    pub y: usize,
}

impl Partition {
    /// Number of cells that belong to the component.
    pub fn area(&self) -> usize {
        self.grid.count(|v, _, _| v != TRANSPARENT)
    }
}

impl Grid {
    /// Split every non-`background` cell into maximal connected components.
    pub fn partition(&self, background: Color, connectivity: Connectivity) -> Vec<Partition> {
        let mut visited = Visited::new(self.width, self.height);
        let mut out = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                if self.cell(x, y) == background || visited.is_marked(x, y) { continue; }
                let cells = self.grow(x, y, background, connectivity, &mut visited);
                out.push(self.crop_component(&cells));
            }
        }
        log::trace!("partition: {} components in {}x{} grid", out.len(), self.width, self.height);
        out
    }

    fn grow(
        &self,
        x: usize,
        y: usize,
        background: Color,
        connectivity: Connectivity,
        visited: &mut Visited,
    ) -> Vec<(usize, usize)> {
        let mut cells = vec![(x, y)];
        let mut stack = vec![(x, y)];
        visited.mark(x, y);

        while let Some((cx, cy)) = stack.pop() {
            for (nx, ny) in visited.neighbors(cx, cy, connectivity) {
                if self.cell(nx, ny) != background && visited.mark(nx, ny) {
                    stack.push((nx, ny));
                    cells.push((nx, ny));
                }
            }
        }
        cells
    }

    fn crop_component(&self, cells: &[(usize, usize)]) -> Partition {
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let max_x = cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max_y = cells.iter().map(|&(_, y)| y).max().unwrap_or(0);

        let mut grid = Grid::blank(max_x - min_x + 1, max_y - min_y + 1);
        for &(x, y) in cells {
            let i = grid.index(x - min_x, y - min_y);
            grid.cells[i] = self.cell(x, y);
        }
        Partition { grid, x: min_x, y: min_y }
    }
}
