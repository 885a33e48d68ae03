use super::Grid;
use crate::core::{Cell, Color};

// Predicates see (value, x, y). Scalar forms are just closures:
// `|v, _, _| v == 3` or `|v, _, _| colors.contains(&v)`.

impl Grid {
    /// First cell in row-major order that satisfies `pred`.
    pub fn find(&self, pred: impl Fn(Color, usize, usize) -> bool) -> Option<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| Cell { value: self.cell(x, y), x, y })
            .find(|c| pred(c.value, c.x, c.y))
    }

    pub fn replace(&self, pred: impl Fn(Color, usize, usize) -> bool, new_value: Color) -> Grid {
        Grid::from_fn(self.width, self.height, |x, y| {
            let v = self.cell(x, y);
            if pred(v, x, y) { new_value } else { v }
        })
    }

    pub fn count(&self, pred: impl Fn(Color, usize, usize) -> bool) -> usize {
        let mut n = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if pred(self.cell(x, y), x, y) { n += 1; }
            }
        }
        n
    }
}
