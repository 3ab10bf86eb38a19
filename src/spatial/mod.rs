//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Logical cell grids for mazes and lattices
//! - Coordinate-keyed pixel regions and their set algebra
//! - Flood-fill grouping and boundary extraction

/// Flood-fill grouping and boundary extraction
pub mod components;
/// Cell grid state and neighborhood queries
pub mod grid;
/// Pixel regions, points and colors
pub mod region;

pub use grid::{Cell, CellState, Grid, Neighbors};
pub use region::{Color, PixelRegion, Point};
