// Per-call working state for the traversal algorithms. Allocated fresh by
// each partition / flood fill call and dropped before it returns.

use crate::core::Connectivity;

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

pub(super) struct Visited {
    width: usize,
    height: usize,
    seen: Vec<bool>,
}

impl Visited {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self { width, height, seen: vec![false; width * height] }
    }

    pub(super) fn is_marked(&self, x: usize, y: usize) -> bool {
        self.seen[y * self.width + x]
    }

    /// Marks `(x, y)`; false if it was already marked.
    pub(super) fn mark(&mut self, x: usize, y: usize) -> bool {
        let i = y * self.width + x;
        !std::mem::replace(&mut self.seen[i], true)
    }

    /// In-bounds neighbors of `(x, y)` under `connectivity`.
    pub(super) fn neighbors(
        &self,
        x: usize,
        y: usize,
        connectivity: Connectivity,
    ) -> impl Iterator<Item = (usize, usize)> {
        let diagonal: &'static [(isize, isize)] = match connectivity {
            Connectivity::Four => &[],
            Connectivity::Eight => &DIAGONAL,
        };
        let orthogonal: &'static [(isize, isize)] = &ORTHOGONAL;
        let (w, h) = (self.width as isize, self.height as isize);
        orthogonal.iter().chain(diagonal).filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if nx >= 0 && nx < w && ny >= 0 && ny < h {
                Some((nx as usize, ny as usize))
            } else {
                None
            }
        })
    }
}
