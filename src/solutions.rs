// Hand-written solutions, keyed by ARC case name.

use crate::core::{Axis, ConcatPolicy};
use crate::grid::Grid;

pub type Solution = fn(&Grid) -> anyhow::Result<Grid>;

pub fn registry() -> Vec<(&'static str, Solution)> {
    vec![("00576224", tile_with_mirrored_band as Solution)]
}

pub fn lookup(name: &str) -> Option<Solution> {
    registry().into_iter().find(|(n, _)| *n == name).map(|(_, s)| s)
}

fn repeat_x(grid: &Grid, times: usize) -> anyhow::Result<Grid> {
    let mut row = grid.clone();
    for _ in 1..times {
        row = row.concat(grid, Axis::X, ConcatPolicy::Strict)?;
    }
    Ok(row)
}

// Three copies side by side, then the same band mirrored on x, then the
// original band again.
fn tile_with_mirrored_band(grid: &Grid) -> anyhow::Result<Grid> {
    let band = repeat_x(grid, 3)?;
    let mirrored = repeat_x(&grid.flip(Axis::X), 3)?;
    let out = band
        .concat(&mirrored, Axis::Y, ConcatPolicy::Strict)?
        .concat(&band, Axis::Y, ConcatPolicy::Strict)?;
    Ok(out)
}
