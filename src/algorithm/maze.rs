//! Growing-tree maze carving over a square grid
//!
//! The carve keeps an explicit frontier stack. A wall cell may join the maze
//! only while exactly one of its own neighbors is open, so the open cells
//! always form a tree: connected, acyclic and never two cells thick.

use log::debug;
use rand::Rng;

use crate::spatial::grid::{Cell, DIRECTIONS, Grid};

/// Carve a perfect maze over a `size x size` grid
///
/// `size = 0` yields an empty grid.
pub fn carve<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::walled(size, size);
    if size == 0 {
        return grid;
    }

    let start = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
    let mut stack = vec![start];
    let mut candidates = Vec::with_capacity(DIRECTIONS.len());

    while let Some(&current) = stack.last() {
        grid.open(current);

        candidates.clear();
        candidates.extend(
            DIRECTIONS
                .iter()
                .filter_map(|&delta| grid.step(current, delta))
                .filter(|&next| !grid.is_open(next) && grid.neighbors(next).count() == 1),
        );

        if candidates.is_empty() {
            stack.pop();
        } else if let Some(&next) = candidates.get(rng.random_range(0..candidates.len())) {
            stack.push(next);
        }
    }

    debug!(
        "carved {size}x{size} maze with {} open cells",
        grid.open_count()
    );
    grid
}
