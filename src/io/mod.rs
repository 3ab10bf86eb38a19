/// Command-line parsing and the generation driver
pub mod cli;
/// Generation constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Palette roles and parsing
pub mod palette;
/// Terminal progress reporting
pub mod progress;
