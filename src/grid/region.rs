// Windowed reads and composition.
//
// All windowed reads are clipped: anything outside the source extent comes
// back as TRANSPARENT. Only `Grid::at` signals out-of-range access.

use rustc_hash::FxHashSet;

use super::Grid;
use crate::core::{Axis, Color, ConcatPolicy, GridError, Result, TRANSPARENT};

impl Grid {
    /// Extract a `width` x `height` window whose top-left corner is `(x, y)`.
    ///
    /// With `colors`, every value outside that set becomes `TRANSPARENT`.
    pub fn select(&self, x: isize, y: isize, width: usize, height: usize, colors: Option<&[Color]>) -> Grid {
        let keep: Option<FxHashSet<Color>> = colors.map(|cs| cs.iter().copied().collect());
        Grid::from_fn(width, height, |j, i| {
            let v = match (x.checked_add(j as isize), y.checked_add(i as isize)) {
                (Some(sx), Some(sy)) => self.get(sx, sy),
                _ => TRANSPARENT,
            };
            match &keep {
                Some(set) if !set.contains(&v) => TRANSPARENT,
                _ => v,
            }
        })
    }

    /// Overlay `other` with its top-left corner at `(x, y)`.
    ///
    /// `TRANSPARENT` cells of `other` let `self` show through; whatever falls
    /// outside `self` is dropped.
    pub fn insert(&self, other: &Grid, x: isize, y: isize) -> Grid {
        Grid::from_fn(self.width, self.height, |j, i| {
            let over = match ((j as isize).checked_sub(x), (i as isize).checked_sub(y)) {
                (Some(ox), Some(oy)) => other.get(ox, oy),
                _ => TRANSPARENT,
            };
            if over != TRANSPARENT { over } else { self.cell(j, i) }
        })
    }

    /// Join side by side (`X`) or stacked (`Y`).
    pub fn concat(&self, other: &Grid, axis: Axis, policy: ConcatPolicy) -> Result<Grid> {
        let (mine, theirs, dimension) = match axis {
            Axis::X => (self.height, other.height, "height"),
            Axis::Y => (self.width, other.width, "width"),
        };
        if mine != theirs && policy == ConcatPolicy::Strict {
            return Err(GridError::DimensionMismatch { axis, dimension, left: mine, right: theirs });
        }

        let joined = match axis {
            Axis::X => {
                let split = self.width as isize;
                Grid::from_fn(self.width + other.width, mine.max(theirs), |j, i| {
                    let (j, i) = (j as isize, i as isize);
                    if j < split { self.get(j, i) } else { other.get(j - split, i) }
                })
            }
            Axis::Y => {
                let split = self.height as isize;
                Grid::from_fn(mine.max(theirs), self.height + other.height, |j, i| {
                    let (j, i) = (j as isize, i as isize);
                    if i < split { self.get(j, i) } else { other.get(j, i - split) }
                })
            }
        };
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Axis, ConcatPolicy, GridError, TRANSPARENT};
    use crate::grid::{grid, sample, Grid};

    #[test]
    fn select_inner_window() {
        let s = sample().select(1, 1, 2, 2, None);
        assert_eq!(s.to_rows(), vec![vec![0, 0], vec![0, 5]]);
    }

    #[test]
    fn select_bottom_band() {
        let s = sample().select(0, 2, 3, 2, None);
        assert_eq!(s.to_rows(), vec![vec![3, 0, 5], vec![4, 0, 6]]);
    }

    #[test]
    fn select_full_extent_is_identity() {
        let g = sample();
        assert_eq!(g.select(0, 0, g.width(), g.height(), None), g);
    }

    #[test]
    fn select_clips_outside() {
        let s = sample().select(-1, 2, 3, 3, None);
        assert_eq!(s.to_rows(), vec![
            vec![-1, 3, 0],
            vec![-1, 4, 0],
            vec![-1, -1, -1],
        ]);
    }

    #[test]
    fn select_color_filter() {
        let s = sample().select(0, 0, 3, 4, Some(&[1, 5]));
        assert_eq!(s.count(|v, _, _| v != TRANSPARENT), 2);
        assert_eq!(s.at(1, 0), Ok(1));
        assert_eq!(s.at(2, 2), Ok(5));
        assert_eq!(s.at(0, 0), Ok(TRANSPARENT));
    }

    #[test]
    fn select_extreme_offsets_are_transparent() {
        let g = Grid::create(2, 2, 1);
        assert_eq!(g.select(isize::MAX, 0, 2, 1, None), Grid::blank(2, 1));
        assert_eq!(g.select(0, isize::MAX - 1, 1, 3, None), Grid::blank(1, 3));
        assert_eq!(g.select(isize::MIN, isize::MIN, 2, 2, None), Grid::blank(2, 2));
    }

    #[test]
    fn insert_with_hole() {
        let sprite = grid(vec![vec![7, 8], vec![9, -1]]);
        let g = sample().insert(&sprite, 1, 1);
        assert_eq!(g.to_rows(), vec![
            vec![0, 1, 2],
            vec![0, 7, 8],
            vec![3, 9, 5],
            vec![4, 0, 6],
        ]);
    }

    #[test]
    fn insert_drops_overhang() {
        let sprite = grid(vec![vec![7, 8], vec![9, -1]]);
        let g = sample().insert(&sprite, 2, 3);
        assert_eq!((g.width(), g.height()), (3, 4));
        assert_eq!(g.at(2, 3), Ok(7));
        assert_eq!(g.count(|v, _, _| v == 8 || v == 9), 0);

        let g = sample().insert(&sprite, -1, -1);
        assert_eq!(g.at(0, 0), Ok(0));
    }

    #[test]
    fn insert_extreme_offsets_leave_target() {
        let g = Grid::create(2, 2, 1);
        let dot = Grid::create(1, 1, 5);
        assert_eq!(g.insert(&dot, isize::MIN, 0), g);
        assert_eq!(g.insert(&dot, 0, isize::MIN), g);
        assert_eq!(g.insert(&dot, isize::MAX, isize::MAX), g);
    }

    #[test]
    fn insert_transparent_is_noop() {
        let g = sample();
        assert_eq!(g.insert(&Grid::blank(5, 5), -2, 1), g);
    }

    #[test]
    fn concat_padded_x() {
        let fives = Grid::create(2, 2, 5);
        let g = sample().concat(&fives, Axis::X, ConcatPolicy::Padded).unwrap();
        assert_eq!((g.width(), g.height()), (5, 4));
        assert_eq!(g.to_rows()[0], vec![0, 1, 2, 5, 5]);
        assert_eq!(g.to_rows()[3], vec![4, 0, 6, -1, -1]);
    }

    #[test]
    fn concat_padded_small_first() {
        let fives = Grid::create(2, 2, 5);
        let other = Grid::create(4, 3, 1);
        let g = fives.concat(&other, Axis::X, ConcatPolicy::Padded).unwrap();
        assert_eq!((g.width(), g.height()), (6, 3));
        assert_eq!(g.to_rows()[2], vec![-1, -1, 1, 1, 1, 1]);
    }

    #[test]
    fn concat_padded_y() {
        let fives = Grid::create(2, 2, 5);
        let g = sample().concat(&fives, Axis::Y, ConcatPolicy::Padded).unwrap();
        assert_eq!((g.width(), g.height()), (3, 6));
        assert_eq!(g.to_rows()[4], vec![5, 5, -1]);
    }

    #[test]
    fn concat_strict_matching() {
        let g = sample();
        let joined = g.concat(&g, Axis::X, ConcatPolicy::Strict).unwrap();
        assert_eq!((joined.width(), joined.height()), (6, 4));
        assert_eq!(joined.select(3, 0, 3, 4, None), g);
    }

    #[test]
    fn concat_strict_mismatch_names_dimension() {
        let fives = Grid::create(2, 2, 5);
        let err = sample().concat(&fives, Axis::X, ConcatPolicy::Strict).unwrap_err();
        assert_eq!(err, GridError::DimensionMismatch { axis: Axis::X, dimension: "height", left: 4, right: 2 });
        let err = sample().concat(&fives, Axis::Y, ConcatPolicy::Strict).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { dimension: "width", .. }));
    }
}
