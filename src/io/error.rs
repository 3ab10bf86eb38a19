//! Error types for layout, erosion and export operations

use std::path::PathBuf;

use crate::algorithm::corners::Corner;

/// Main error type for all generation operations
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A size, side length or erosion parameter is outside its valid range
    #[error("Invalid dimension '{parameter}' = '{value}': {reason}")]
    InvalidDimension {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A corrosion profile does not fit inside the rectangle it is applied to
    #[error(
        "Erosion at {corner:?} needs {columns} columns and depth {depth}, \
         but the rectangle is only {width}x{height}"
    )]
    OutOfBoundsErosion {
        /// Corner the profile was aimed at
        corner: Corner,
        /// Number of profile entries
        columns: usize,
        /// Deepest profile entry
        depth: u32,
        /// Rectangle width
        width: i32,
        /// Rectangle height
        height: i32,
    },

    /// Palette input could not be turned into colors
    #[error("Invalid palette entry '{value}': {reason}")]
    InvalidPalette {
        /// The rejected palette text
        value: String,
        /// Explanation of why it was rejected
        reason: String,
    },

    /// Failed to encode or save the generated image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidDimension {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(value: &impl ToString, reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidPalette {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

