/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of grid mazes
pub mod image;
/// Plain-text maze renderings
pub mod text;
