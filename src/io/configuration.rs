//! Generation constants and runtime configuration

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::io::error::{Result, invalid_dimension};
use crate::io::palette::Palette;
use crate::spatial::region::Color;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas edge in pixels
pub const DEFAULT_CANVAS_SIZE: usize = 1024;

/// Maze cell edge in pixels
pub const DEFAULT_MAZE_SIDE: usize = 5;

/// Lattice tile edge in pixels
pub const DEFAULT_TILING_SIDE: usize = 9;

/// Columns and depth of a lattice or blob corner erosion
pub const DEFAULT_EROSION: usize = 5;

/// Drop shadow length for single tiles
pub const DEFAULT_BAND_LENGTH: usize = 2;

/// Number of rectangles scattered by the blob generator
pub const DEFAULT_BLOB_COUNT: usize = 120;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

/// Palettes must at least fill the background, shadow and tile roles
pub const MIN_PALETTE_COLORS: usize = 3;

/// Background, shadow, tile
pub const DEFAULT_PALETTE: [Color; 3] = [
    [210, 173, 140, 255],
    [206, 155, 122, 255],
    [220, 194, 122, 255],
];

/// Lattice tiles mostly take the first palette color
pub const DEFAULT_TILE_WEIGHTS: [f64; 3] = [30.0, 1.0, 1.0];

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters shared by every generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed of the single random source
    pub seed: u64,
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Edge of a maze cell or lattice tile in pixels
    pub side: usize,
    /// Corrosion columns and initial depth per corner
    pub erosion: usize,
    /// Shading band length in pixels
    pub band_length: usize,
    /// Number of scattered rectangles for blob layouts
    pub blob_count: usize,
    /// Colors and tile weights
    pub palette: Palette,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            side: DEFAULT_MAZE_SIDE,
            erosion: DEFAULT_MAZE_SIDE / 2,
            band_length: DEFAULT_MAZE_SIDE / 2 + 2,
            blob_count: DEFAULT_BLOB_COUNT,
            palette: Palette::default(),
        }
    }
}

impl GeneratorConfig {
    /// Reject parameters that cannot produce an image
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when the canvas is empty or larger than
    /// [`MAX_CANVAS_DIMENSION`], the cell side is zero or does not fit the
    /// canvas, or the erosion would reach past the cell side.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_dimension(
                    parameter,
                    &value,
                    &format!("must be within 1..={MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        if self.side == 0 {
            return Err(invalid_dimension("side", &self.side, &"must be at least 1"));
        }
        if self.side > self.width.min(self.height) {
            return Err(invalid_dimension(
                "side",
                &self.side,
                &"cell does not fit on the canvas",
            ));
        }
        if self.erosion > self.side {
            return Err(invalid_dimension(
                "erosion",
                &self.erosion,
                &format!("must not exceed the cell side {}", self.side),
            ));
        }
        Ok(())
    }

    /// Edge length of the square maze that fits the canvas behind a one-cell margin
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when the canvas is too small for a 1x1 maze.
    pub fn maze_size(&self) -> Result<usize> {
        let cells = self.width.min(self.height) / self.side.max(1);
        match cells.checked_sub(1) {
            Some(size) if size >= 1 => Ok(size),
            _ => Err(invalid_dimension(
                "width",
                &self.width.min(self.height),
                &format!("too small for a maze of side {}", self.side),
            )),
        }
    }

    /// Random source for one generation run
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
