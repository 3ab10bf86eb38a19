//! Tile composition over maze grids, uniform lattices and scattered blobs
//!
//! Every layout follows the same recipe: build a fresh rectangle per cell,
//! erode its eligible corners with independent profiles, move it into place and
//! union it into the tile layer. Layouts differ in which corners are eligible
//! and in what counts as one "cell" for shading and outlining.

use log::debug;
use rand::Rng;

use crate::algorithm::corners::{Corner, classify};
use crate::algorithm::corrosion::erode_corners;
use crate::algorithm::shading::{column_floor_band, shade};
use crate::io::configuration::GeneratorConfig;
use crate::io::error::{Result, invalid_dimension};
use crate::io::palette::Palette;
use crate::math::sampling::shuffled_corners;
use crate::spatial::grid::Grid;
use crate::spatial::region::{Color, PixelRegion, Point};

/// Visual parameters shared by all layouts
#[derive(Debug, Clone, PartialEq)]
pub struct TileStyle {
    /// Edge of a cell in pixels
    pub side: usize,
    /// Corrosion columns and initial depth per corner
    pub erosion: usize,
    /// Length of underline bands
    pub band_length: usize,
    /// Colors for background, shadow, tiles and outlines
    pub palette: Palette,
}

impl From<&GeneratorConfig> for TileStyle {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            side: config.side,
            erosion: config.erosion,
            band_length: config.band_length,
            palette: config.palette.clone(),
        }
    }
}

/// Layered result of one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Fill behind every layer
    pub background: Color,
    /// Underline bands, drawn beneath the tiles
    pub shading: PixelRegion,
    /// Eroded tiles
    pub tiles: PixelRegion,
    /// Blob outlines, drawn on top
    pub outline: PixelRegion,
}

impl Composition {
    /// Stack background, shading, tiles and outline into one region
    ///
    /// Later layers win on shared coordinates; pixels off the canvas are dropped.
    /// This holds one entry per canvas pixel; export goes through
    /// [`crate::io::image::composition_to_image`] instead.
    pub fn flatten(&self) -> PixelRegion {
        let mut canvas = PixelRegion::rectangle(
            Point::new(0, 0),
            Point::new(self.width as i32, self.height as i32),
        )
        .with_color(self.background);

        for layer in self.layers() {
            canvas.extend(
                layer
                    .iter()
                    .filter(|(p, _)| p.canvas_index(self.width, self.height).is_some()),
            );
        }
        canvas
    }

    /// Foreground layers from bottom to top
    pub const fn layers(&self) -> [&PixelRegion; 3] {
        [&self.shading, &self.tiles, &self.outline]
    }
}

/// Assembles eroded tiles into layered compositions
#[derive(Debug, Clone)]
pub struct TileCompositor {
    style: TileStyle,
}

impl TileCompositor {
    /// Create a compositor for a style
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when the side is zero or the erosion is deeper
    /// than the side.
    pub fn new(style: TileStyle) -> Result<Self> {
        if style.side == 0 {
            return Err(invalid_dimension("side", &style.side, &"must be at least 1"));
        }
        if style.erosion > style.side {
            return Err(invalid_dimension(
                "erosion",
                &style.erosion,
                &format!("must not exceed the cell side {}", style.side),
            ));
        }
        Ok(Self { style })
    }

    /// The style this compositor draws with
    pub const fn style(&self) -> &TileStyle {
        &self.style
    }

    const fn side(&self) -> i32 {
        self.style.side as i32
    }

    /// A `side x side` tile at the origin with the given corners eroded
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn erode_tile<R: Rng + ?Sized>(
        &self,
        corners: impl IntoIterator<Item = Corner>,
        color: Color,
        rng: &mut R,
    ) -> Result<PixelRegion> {
        let p0 = Point::new(0, 0);
        let p1 = Point::new(self.side(), self.side());
        erode_corners(
            PixelRegion::rectangle(p0, p1).with_color(color),
            p0,
            p1,
            corners,
            self.style.erosion,
            self.style.erosion as u32,
            rng,
        )
    }

    /// Compose one tile per open maze cell, behind a one-cell margin
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_maze<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Composition> {
        self.compose_maze_with_progress(grid, width, height, rng, &mut |_, _| {})
    }

    /// [`TileCompositor::compose_maze`] reporting `(done, total)` cells
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_maze_with_progress<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        width: usize,
        height: usize,
        rng: &mut R,
        progress: &mut impl FnMut(usize, usize),
    ) -> Result<Composition> {
        let side = self.side();
        let total = grid.open_count();
        let mut tiles = PixelRegion::new();

        for (done, cell) in grid.open_cells().enumerate() {
            let corners = classify(cell, grid);
            let tile = self.erode_tile(corners.iter(), self.style.palette.tile(), rng)?;
            let origin = Point::new(side * (cell.col as i32 + 1), side * (cell.row as i32 + 1));
            tiles.union_in_place(&tile.shift(origin));
            progress(done + 1, total);
        }

        let shading = shade(
            &tiles,
            width,
            height,
            self.style.band_length,
            self.style.palette.shadow(),
        );
        debug!(
            "maze composition: {total} tiles, {} tile pixels, {} shading pixels",
            tiles.len(),
            shading.len()
        );

        Ok(self.composition(width, height, shading, tiles, PixelRegion::new()))
    }

    /// Compose a uniform lattice of tiles covering the canvas
    ///
    /// Lattice tiles stand alone, so all four corners of each one are eroded in
    /// a random order and each tile draws its own weighted palette color.
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_lattice<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Composition> {
        self.compose_lattice_with_progress(width, height, rng, &mut |_, _| {})
    }

    /// [`TileCompositor::compose_lattice`] reporting `(done, total)` tiles
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_lattice_with_progress<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
        progress: &mut impl FnMut(usize, usize),
    ) -> Result<Composition> {
        let side = self.side();
        let lattice = Grid::uniform(height / self.style.side, width / self.style.side);
        let total = lattice.open_count();
        let mut tiles = PixelRegion::new();

        for (done, cell) in lattice.open_cells().enumerate() {
            let color = self.style.palette.choose(rng);
            let corners = shuffled_corners(rng);
            let tile = self.erode_tile(corners, color, rng)?;
            let origin = Point::new(side * cell.col as i32, side * cell.row as i32);
            tiles.union_in_place(&tile.shift(origin));
            progress(done + 1, total);
        }

        debug!(
            "lattice composition: {}x{} tiles, {} pixels",
            lattice.rows(),
            lattice.cols(),
            tiles.len()
        );

        Ok(self.composition(
            width,
            height,
            PixelRegion::new(),
            tiles,
            PixelRegion::new(),
        ))
    }

    /// Scatter `count` eroded rectangles and treat each connected blob as a cell
    ///
    /// Rectangles have edges in `[side, 3 * side)`, clamped to the canvas. After
    /// the union, every 4-connected component gets one palette color, an outline
    /// along its boundary and its own underline band.
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_blobs<R: Rng + ?Sized>(
        &self,
        count: usize,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Composition> {
        self.compose_blobs_with_progress(count, width, height, rng, &mut |_, _| {})
    }

    /// [`TileCompositor::compose_blobs`] reporting `(done, total)` steps
    ///
    /// The total covers placed rectangles plus shaded components and grows once
    /// the components are known.
    ///
    /// # Errors
    ///
    /// Propagates erosion bound errors.
    pub fn compose_blobs_with_progress<R: Rng + ?Sized>(
        &self,
        count: usize,
        width: usize,
        height: usize,
        rng: &mut R,
        progress: &mut impl FnMut(usize, usize),
    ) -> Result<Composition> {
        let side = self.style.side;
        let mut blobs = PixelRegion::new();

        for placed in 0..count {
            let w = rng.random_range(side..3 * side).min(width);
            let h = rng.random_range(side..3 * side).min(height);
            let x = rng.random_range(0..=width - w) as i32;
            let y = rng.random_range(0..=height - h) as i32;

            let p0 = Point::new(x, y);
            let p1 = Point::new(x + w as i32, y + h as i32);
            let corners = shuffled_corners(rng);
            let blob = erode_corners(
                PixelRegion::rectangle(p0, p1),
                p0,
                p1,
                corners,
                self.style.erosion,
                self.style.erosion as u32,
                rng,
            )?;
            blobs.union_in_place(&blob);
            progress(placed + 1, count);
        }

        let components = blobs.connected_components(width, height);
        let total = count + components.len();
        let palette = &self.style.palette;

        let mut tiles = PixelRegion::new();
        let mut outline = PixelRegion::new();
        let mut shading = PixelRegion::new();
        for (index, component) in components.iter().enumerate() {
            let color = palette.choose(rng);
            outline.union_in_place(
                &component
                    .boundary(width, height)
                    .with_color(palette.outline()),
            );
            shading.union_in_place(&shade(
                component,
                width,
                height,
                self.style.band_length,
                palette.shadow(),
            ));
            tiles.union_in_place(&component.clone().with_color(color));
            progress(count + index + 1, total);
        }

        debug!(
            "blob composition: {count} rectangles merged into {} components",
            components.len()
        );

        Ok(self.composition(width, height, shading, tiles, outline))
    }

    /// A single rectangle with all four corners eroded and a drop shadow
    ///
    /// The rectangle spans `[w/10, 9w/20) x [h/10, 3h/10)` of the canvas.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when that rectangle cannot hold the configured
    /// erosion.
    pub fn compose_single<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Composition> {
        let (p0, p1) = single_tile_span(width, height, self.style.erosion)?;
        let corners = shuffled_corners(rng);
        let tile = erode_corners(
            PixelRegion::rectangle(p0, p1).with_color(self.style.palette.tile()),
            p0,
            p1,
            corners,
            self.style.erosion,
            self.style.erosion as u32,
            rng,
        )?;
        let shading = column_floor_band(&tile, self.style.band_length, self.style.palette.shadow());

        Ok(self.composition(width, height, shading, tile, PixelRegion::new()))
    }

    fn composition(
        &self,
        width: usize,
        height: usize,
        shading: PixelRegion,
        tiles: PixelRegion,
        outline: PixelRegion,
    ) -> Composition {
        Composition {
            width,
            height,
            background: self.style.palette.background(),
            shading,
            tiles,
            outline,
        }
    }
}

/// Span of the single-tile layout on a `width x height` canvas
///
/// # Errors
///
/// Returns `InvalidDimension` when the span is narrower or shorter than
/// `erosion`, so no corner profile could fit whatever the seed.
pub fn single_tile_span(width: usize, height: usize, erosion: usize) -> Result<(Point, Point)> {
    let p0 = Point::new((width / 10) as i32, (height / 10) as i32);
    let p1 = Point::new((width * 9 / 20) as i32, (height * 3 / 10) as i32);
    let (span_w, span_h) = (p1.x - p0.x, p1.y - p0.y);

    if span_w <= 0 || span_h <= 0 || span_w.min(span_h) < erosion as i32 {
        return Err(invalid_dimension(
            "canvas",
            &format!("{width}x{height}"),
            &format!("single tile of {span_w}x{span_h} cannot hold erosion {erosion}"),
        ));
    }
    Ok((p0, p1))
}
