//! Underline shading beneath silhouette edges

use std::collections::BTreeMap;

use crate::spatial::region::{Color, PixelRegion, Point};

/// Shading band below every filled-to-empty transition of `region`
///
/// The region is materialized over `[0, width) x [0, height)`. For each filled
/// pixel whose lower neighbor inside the canvas is empty, `band_length` pixels
/// starting at that neighbor are emitted in `color`. Transitions on the last
/// canvas row have nothing to compare against and are left unshaded.
pub fn shade(
    region: &PixelRegion,
    width: usize,
    height: usize,
    band_length: usize,
    color: Color,
) -> PixelRegion {
    let occupied = region.to_boolean_matrix(width, height);
    let mut band = PixelRegion::new();

    for y in 0..height.saturating_sub(1) {
        for x in 0..width {
            let filled = occupied.get([y, x]).copied().unwrap_or(false);
            let below = occupied.get([y + 1, x]).copied().unwrap_or(false);
            if filled && !below {
                for k in 1..=band_length {
                    band.insert(Point::new(x as i32, (y + k) as i32), color);
                }
            }
        }
    }

    band
}

/// Drop shadow below the lowest pixel of every column
///
/// Unlike [`shade`] this needs no canvas: only the bottom silhouette of each
/// column casts a band, whatever lies above it.
pub fn column_floor_band(region: &PixelRegion, band_length: usize, color: Color) -> PixelRegion {
    let mut floors: BTreeMap<i32, i32> = BTreeMap::new();
    for point in region.points() {
        floors
            .entry(point.x)
            .and_modify(|y| *y = (*y).max(point.y))
            .or_insert(point.y);
    }

    let mut band = PixelRegion::new();
    for (x, floor) in floors {
        for k in 1..=band_length as i32 {
            band.insert(Point::new(x, floor + k), color);
        }
    }
    band
}
