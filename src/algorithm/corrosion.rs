//! Stochastic corner corrosion of rectangular tiles
//!
//! A corrosion profile is a random walk of depths, one per column, that only
//! ever shrinks by at most half per step. Applying it to a corner removes a
//! staircase of pixels eating into the rectangle from that corner.

use rand::Rng;

use crate::algorithm::corners::Corner;
use crate::io::error::{GenerationError, Result, invalid_dimension};
use crate::spatial::region::{PixelRegion, Point};

/// Erosion depth per column approaching a corner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorrosionProfile {
    depths: Vec<u32>,
}

impl CorrosionProfile {
    /// Wrap precomputed depths
    pub const fn from_depths(depths: Vec<u32>) -> Self {
        Self { depths }
    }

    /// Depths in column order, starting at the corner
    pub fn depths(&self) -> &[u32] {
        &self.depths
    }

    /// Number of eroded columns
    pub const fn len(&self) -> usize {
        self.depths.len()
    }

    /// True when nothing would be eroded
    pub const fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Deepest entry, zero for an empty profile
    pub fn max_depth(&self) -> u32 {
        self.depths.iter().copied().max().unwrap_or(0)
    }
}

/// Generate a profile of `cols` depths seeded by `dist`
///
/// Each depth is drawn uniformly from `[previous / 2, previous]`, with `dist`
/// standing in for the depth before the first column.
pub fn generate_profile<R: Rng + ?Sized>(cols: usize, dist: u32, rng: &mut R) -> CorrosionProfile {
    let mut depths = Vec::with_capacity(cols);
    let mut last = dist;
    for _ in 0..cols {
        let depth = rng.random_range(last / 2..=last);
        depths.push(depth);
        last = depth;
    }
    CorrosionProfile { depths }
}

/// Coordinates a profile removes from the `[p0, p1)` rectangle at `corner`
///
/// # Errors
///
/// Returns `InvalidDimension` for an empty rectangle and `OutOfBoundsErosion`
/// when the profile is longer than the rectangle is wide or deeper than it is
/// tall.
pub fn erosion_points(
    profile: &CorrosionProfile,
    p0: Point,
    p1: Point,
    corner: Corner,
) -> Result<Vec<Point>> {
    check_fits(p0, p1, corner, profile.len(), profile.max_depth())?;

    let mut points = Vec::with_capacity(profile.depths.iter().map(|&d| d as usize).sum());
    for (i, &d) in (0i32..).zip(&profile.depths) {
        for o in 0..d as i32 {
            points.push(match corner {
                Corner::TopLeft => Point::new(p0.x + i, p0.y + o),
                Corner::TopRight => Point::new(p1.x - 1 - i, p0.y + o),
                Corner::BottomRight => Point::new(p1.x - 1 - i, p1.y - 1 - o),
                Corner::BottomLeft => Point::new(p0.x + i, p1.y - 1 - o),
            });
        }
    }
    Ok(points)
}

/// Erode one corner of the rectangular region spanning `[p0, p1)`
///
/// Removal is by coordinate only, so applying the same profile twice changes
/// nothing the second time.
///
/// # Errors
///
/// Propagates the bound checks of [`erosion_points`]; nothing is removed on error.
pub fn apply(
    region: &PixelRegion,
    profile: &CorrosionProfile,
    p0: Point,
    p1: Point,
    corner: Corner,
) -> Result<PixelRegion> {
    let points = erosion_points(profile, p0, p1, corner)?;
    Ok(region.clone().difference(points))
}

/// Erode each listed corner with its own freshly generated profile
///
/// The parameters are checked against the rectangle before any profile is
/// drawn, so the outcome never depends on the random stream.
///
/// # Errors
///
/// Returns `InvalidDimension` for an empty rectangle and `OutOfBoundsErosion`
/// when `cols` or `dist` exceed the rectangle.
pub fn erode_corners<R: Rng + ?Sized>(
    region: PixelRegion,
    p0: Point,
    p1: Point,
    corners: impl IntoIterator<Item = Corner>,
    cols: usize,
    dist: u32,
    rng: &mut R,
) -> Result<PixelRegion> {
    let corners: Vec<Corner> = corners.into_iter().collect();
    let Some(&first) = corners.first() else {
        return Ok(region);
    };
    // Every drawn depth is at most `dist`
    check_fits(p0, p1, first, cols, dist)?;

    let mut eroded = region;
    for corner in corners {
        let profile = generate_profile(cols, dist, rng);
        eroded.remove_points(erosion_points(&profile, p0, p1, corner)?);
    }
    Ok(eroded)
}

// Rejects `columns x depth` staircases that do not fit inside `[p0, p1)`
fn check_fits(p0: Point, p1: Point, corner: Corner, columns: usize, depth: u32) -> Result<()> {
    let width = p1.x - p0.x;
    let height = p1.y - p0.y;
    if width <= 0 || height <= 0 {
        return Err(invalid_dimension(
            "rectangle",
            &format!("{width}x{height}"),
            &"erosion needs a non-empty rectangle",
        ));
    }
    if columns > width as usize || depth > height as u32 {
        return Err(GenerationError::OutOfBoundsErosion {
            corner,
            columns,
            depth,
            width,
            height,
        });
    }
    Ok(())
}
