use std::collections::VecDeque;

use super::scratch::Visited;
use super::Grid;
use crate::core::{Color, Connectivity};

impl Grid {
    /// Paint every `background` cell reachable from the border with `fill`.
    ///
    /// Background enclosed by foreground is left alone, which is what makes
    /// this useful for telling "outside" from "inside".
    pub fn flood_fill(&self, fill: Color, background: Color, connectivity: Connectivity) -> Grid {
        let mut out = self.clone();
        if self.is_empty() { return out; }

        let (w, h) = (self.width, self.height);
        let mut visited = Visited::new(w, h);
        let mut queue = VecDeque::new();

        let border = (0..w)
            .flat_map(|x| [(x, 0), (x, h - 1)])
            .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]));
        for (x, y) in border {
            if self.cell(x, y) == background && visited.mark(x, y) {
                queue.push_back((x, y));
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            let i = out.index(x, y);
            out.cells[i] = fill;
            for (nx, ny) in visited.neighbors(x, y, connectivity) {
                if self.cell(nx, ny) == background && visited.mark(nx, ny) {
                    queue.push_back((nx, ny));
                }
            }
        }
        out
    }
}
