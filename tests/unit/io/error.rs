//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use pixmaze::GenerationError;
    use pixmaze::algorithm::corners::Corner;
    use pixmaze::io::error::{invalid_dimension, invalid_palette};
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_dimension_display() {
        let error = invalid_dimension("erosion", &7, &"must not exceed the cell side 5");
        assert_eq!(
            error.to_string(),
            "Invalid dimension 'erosion' = '7': must not exceed the cell side 5"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_out_of_bounds_erosion_display() {
        let error = GenerationError::OutOfBoundsErosion {
            corner: Corner::TopLeft,
            columns: 5,
            depth: 3,
            width: 4,
            height: 4,
        };
        assert_eq!(
            error.to_string(),
            "Erosion at TopLeft needs 5 columns and depth 3, but the rectangle is only 4x4"
        );
    }

    #[test]
    fn test_invalid_palette_display() {
        let error = invalid_palette(&"#12", &"expected #rrggbb or #rrggbbaa");
        assert_eq!(
            error.to_string(),
            "Invalid palette entry '#12': expected #rrggbb or #rrggbbaa"
        );
    }

    // Tests that I/O failures keep their underlying cause
    #[test]
    fn test_file_system_error_chains_source() {
        let error = GenerationError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            error.to_string(),
            "File system error during create directory on '/tmp/out': denied"
        );
        assert!(error.source().is_some_and(|s| s.to_string() == "denied"));
    }
}
