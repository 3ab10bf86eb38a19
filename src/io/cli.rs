//! Command-line interface for rendering one pattern to a PNG file

use crate::algorithm::compositor::{Composition, TileCompositor, TileStyle, single_tile_span};
use crate::algorithm::maze::carve;
use crate::io::configuration::{
    DEFAULT_BAND_LENGTH, DEFAULT_BLOB_COUNT, DEFAULT_CANVAS_SIZE, DEFAULT_EROSION,
    DEFAULT_MAZE_SIDE, DEFAULT_SEED, DEFAULT_TILING_SIDE, GeneratorConfig,
};
use crate::io::error::Result;
use crate::io::image::export_composition_as_png;
use crate::io::palette::Palette;
use crate::io::progress::StageProgress;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Layouts the generator can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Carved maze with eroded outward corners and an underline shadow
    Maze,
    /// Uniform lattice of eroded tiles
    Tiling,
    /// Scattered eroded rectangles grouped into outlined blobs
    Blobs,
    /// A single eroded rectangle with a drop shadow
    Tile,
}

impl Pattern {
    /// Canvas edge used when neither width nor height is given
    pub const fn default_canvas(self) -> usize {
        match self {
            Self::Maze => DEFAULT_CANVAS_SIZE,
            Self::Tiling | Self::Blobs => DEFAULT_CANVAS_SIZE / 2,
            Self::Tile => 100,
        }
    }

    /// Cell side used when `--side` is not given
    pub const fn default_side(self) -> usize {
        match self {
            Self::Maze => DEFAULT_MAZE_SIDE,
            Self::Tiling | Self::Blobs | Self::Tile => DEFAULT_TILING_SIDE,
        }
    }

    /// Erosion used when `--erosion` is not given
    pub const fn default_erosion(self, side: usize) -> usize {
        match self {
            Self::Maze => side / 2,
            Self::Tiling | Self::Blobs | Self::Tile => DEFAULT_EROSION,
        }
    }

    /// Band length used when `--band` is not given
    pub const fn default_band(self, side: usize) -> usize {
        match self {
            Self::Maze => side / 2 + 2,
            Self::Tiling | Self::Blobs | Self::Tile => DEFAULT_BAND_LENGTH,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pixmaze")]
#[command(
    author,
    version,
    about = "Generate pixel-art mazes and tilings with eroded corners"
)]
/// Command-line arguments for the pattern generator
pub struct Cli {
    /// Layout to render
    #[arg(value_enum, value_name = "PATTERN")]
    pub pattern: Pattern,

    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Cell or tile edge in pixels
    #[arg(long)]
    pub side: Option<usize>,

    /// Corrosion columns and initial depth per corner
    #[arg(short, long)]
    pub erosion: Option<usize>,

    /// Shading band length in pixels
    #[arg(short, long)]
    pub band: Option<usize>,

    /// Number of rectangles scattered by the blobs pattern
    #[arg(short, long, default_value_t = DEFAULT_BLOB_COUNT)]
    pub count: usize,

    /// Comma-separated colors: background, shadow, tile, extra tile colors
    #[arg(short, long, value_name = "#RRGGBB,...")]
    pub palette: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Resolve pattern defaults into a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be parsed, a dimension is invalid
    /// or the canvas is too small for the pattern
    pub fn config(&self) -> Result<GeneratorConfig> {
        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => {
                let edge = self.pattern.default_canvas();
                (edge, edge)
            }
        };
        let side = self.side.unwrap_or_else(|| self.pattern.default_side());
        let palette = self
            .palette
            .as_deref()
            .map(Palette::parse)
            .transpose()?
            .unwrap_or_default();

        let config = GeneratorConfig {
            seed: self.seed,
            width,
            height,
            side,
            erosion: self
                .erosion
                .unwrap_or_else(|| self.pattern.default_erosion(side)),
            band_length: self.band.unwrap_or_else(|| self.pattern.default_band(side)),
            blob_count: self.count,
            palette,
        };
        config.validate()?;
        if self.pattern == Pattern::Tile {
            single_tile_span(config.width, config.height, config.erosion)?;
        }
        Ok(config)
    }
}

/// Runs one generation pass from parsed arguments to an exported image
pub struct Generator {
    cli: Cli,
    progress: StageProgress,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = StageProgress::new(cli.quiet);
        Self { cli, progress }
    }

    /// Generate and export the requested pattern
    ///
    /// Does nothing when the output exists and `--force` is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, composition or export fails
    pub fn run(&self) -> Result<()> {
        if self.cli.output.exists() && !self.cli.force {
            warn!(
                "skipping {}: output exists (use --force to overwrite)",
                self.cli.output.display()
            );
            return Ok(());
        }

        let start_time = Instant::now();
        let config = self.cli.config()?;
        let composition = self.compose(&config)?;

        self.progress.begin("export");
        export_composition_as_png(&composition, &self.cli.output)?;
        self.progress.finish();

        info!(
            "wrote {:?} pattern {}x{} (seed {}) to {} in {:.2?}",
            self.cli.pattern,
            config.width,
            config.height,
            config.seed,
            self.cli.output.display(),
            start_time.elapsed()
        );
        Ok(())
    }

    /// Build the layered composition for the configured pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is too small for the pattern or erosion
    /// does not fit its tiles
    pub fn compose(&self, config: &GeneratorConfig) -> Result<Composition> {
        let compositor = TileCompositor::new(TileStyle::from(config))?;
        let mut rng = config.rng();
        let progress = &self.progress;
        let mut report = |done, total| progress.update(done, total);

        match self.cli.pattern {
            Pattern::Maze => {
                progress.begin("carve");
                let grid = carve(config.maze_size()?, &mut rng);
                progress.complete(format!("{} open cells", grid.open_count()));

                progress.begin("compose");
                compositor.compose_maze_with_progress(
                    &grid,
                    config.width,
                    config.height,
                    &mut rng,
                    &mut report,
                )
            }
            Pattern::Tiling => {
                progress.begin("compose");
                compositor.compose_lattice_with_progress(
                    config.width,
                    config.height,
                    &mut rng,
                    &mut report,
                )
            }
            Pattern::Blobs => {
                progress.begin("compose");
                compositor.compose_blobs_with_progress(
                    config.blob_count,
                    config.width,
                    config.height,
                    &mut rng,
                    &mut report,
                )
            }
            Pattern::Tile => {
                progress.begin("compose");
                compositor.compose_single(config.width, config.height, &mut rng)
            }
        }
    }
}
