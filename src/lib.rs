//! Procedural pixel-art mazes and tilings built from stochastically eroded tiles
//!
//! A maze is carved over a cell grid, each open cell becomes a square tile whose
//! outward-facing corners are corroded by a random staircase, and the union of
//! all tiles receives an underline shadow before being encoded as PNG.

#![forbid(unsafe_code)]

/// Maze carving, corner classification, corrosion, shading and composition
pub mod algorithm;
/// Configuration, palettes, CLI, progress, export and error handling
pub mod io;
/// Random sampling helpers
pub mod math;
/// Cell grids and pixel regions
pub mod spatial;

pub use io::error::{GenerationError, Result};
