//! Tests for generation constants and configuration validation

#[cfg(test)]
mod tests {
    use pixmaze::GenerationError;
    use pixmaze::io::configuration::{
        DEFAULT_BAND_LENGTH, DEFAULT_EROSION, DEFAULT_MAZE_SIDE, DEFAULT_PALETTE, DEFAULT_SEED,
        DEFAULT_TILE_WEIGHTS, DEFAULT_TILING_SIDE, GeneratorConfig, MAX_CANVAS_DIMENSION,
        MIN_PALETTE_COLORS,
    };
    use rand::Rng;

    // Tests the drawing constants used by the bundled generators
    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_MAZE_SIDE, 5);
        assert_eq!(DEFAULT_TILING_SIDE, 9);
        assert_eq!(DEFAULT_EROSION, 5);
        assert_eq!(DEFAULT_BAND_LENGTH, 2);
        assert_eq!(MAX_CANVAS_DIMENSION, 10_000);
        assert_eq!(DEFAULT_PALETTE.len(), MIN_PALETTE_COLORS);
        assert_eq!(DEFAULT_TILE_WEIGHTS.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn test_default_config_is_valid_maze_setup() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.erosion, DEFAULT_MAZE_SIDE / 2);
        assert_eq!(config.band_length, DEFAULT_MAZE_SIDE / 2 + 2);
        assert_eq!(config.maze_size().ok(), Some(203));
    }

    #[test]
    fn test_validate_rejects_each_bad_dimension() {
        let cases = [
            (
                GeneratorConfig {
                    width: 0,
                    ..GeneratorConfig::default()
                },
                "width",
            ),
            (
                GeneratorConfig {
                    height: MAX_CANVAS_DIMENSION + 1,
                    ..GeneratorConfig::default()
                },
                "height",
            ),
            (
                GeneratorConfig {
                    side: 0,
                    ..GeneratorConfig::default()
                },
                "side",
            ),
            (
                GeneratorConfig {
                    width: 8,
                    height: 8,
                    side: 9,
                    ..GeneratorConfig::default()
                },
                "side",
            ),
            (
                GeneratorConfig {
                    erosion: 6,
                    ..GeneratorConfig::default()
                },
                "erosion",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(GenerationError::InvalidDimension { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_erosion_equal_to_side_is_allowed() {
        let config = GeneratorConfig {
            erosion: DEFAULT_MAZE_SIDE,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_maze_size_leaves_one_cell_margin() {
        let sized = |width, height, side| {
            GeneratorConfig {
                width,
                height,
                side,
                ..GeneratorConfig::default()
            }
            .maze_size()
        };

        assert_eq!(sized(100, 100, 5).ok(), Some(19));
        assert_eq!(sized(100, 40, 5).ok(), Some(7));
        assert_eq!(sized(10, 10, 5).ok(), Some(1));
        assert!(sized(9, 9, 5).is_err());
    }

    #[test]
    fn test_rng_is_seeded_from_config() {
        let config = GeneratorConfig {
            seed: 1234,
            ..GeneratorConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
