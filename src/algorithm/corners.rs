//! Corner exposure classification for grid cells
//!
//! A corner of an open cell may be eroded only when both grid directions
//! meeting at it are closed. Corners shared with another open cell stay sharp
//! so that neighboring tiles keep touching.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::{Cell, Grid, Neighbors};

/// One of the four corners of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Minimum x, minimum y
    TopLeft,
    /// Maximum x, minimum y
    TopRight,
    /// Maximum x, maximum y
    BottomRight,
    /// Minimum x, maximum y
    BottomLeft,
}

impl Corner {
    /// All corners in clockwise order from the top left
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Position of the corner in [`Corner::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }
}

/// Set of exposed corners of one cell
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ExposureMask {
    bits: BitArr!(for 4, in u8),
}

impl ExposureMask {
    /// No corner exposed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every corner exposed
    pub fn all() -> Self {
        Corner::ALL.into_iter().collect()
    }

    /// Derive the mask from a cell's open-neighbor flags
    pub fn from_neighbors(neighbors: Neighbors) -> Self {
        let Neighbors {
            up,
            down,
            left,
            right,
        } = neighbors;

        let mut mask = Self::empty();
        mask.set(Corner::TopLeft, !left && !up);
        mask.set(Corner::TopRight, !right && !up);
        mask.set(Corner::BottomRight, !right && !down);
        mask.set(Corner::BottomLeft, !left && !down);
        mask
    }

    /// Mark a corner as exposed
    pub fn insert(&mut self, corner: Corner) {
        self.set(corner, true);
    }

    fn set(&mut self, corner: Corner, exposed: bool) {
        self.bits.set(corner.index(), exposed);
    }

    /// Test whether a corner is exposed
    pub fn contains(&self, corner: Corner) -> bool {
        self.bits.get(corner.index()).is_some_and(|bit| *bit)
    }

    /// True when no corner is exposed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of exposed corners
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Exposed corners in clockwise order from the top left
    pub fn iter(&self) -> impl Iterator<Item = Corner> + '_ {
        Corner::ALL.into_iter().filter(|&c| self.contains(c))
    }
}

impl FromIterator<Corner> for ExposureMask {
    fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
        let mut mask = Self::empty();
        for corner in iter {
            mask.insert(corner);
        }
        mask
    }
}

impl fmt::Debug for ExposureMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Classify which corners of `cell` are exposed to walls or the grid boundary
pub fn classify(cell: Cell, grid: &Grid) -> ExposureMask {
    ExposureMask::from_neighbors(grid.neighbors(cell))
}
