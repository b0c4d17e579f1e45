/// Command-line parsing and run orchestration
pub mod cli;
/// Constants, defaults and run configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG preview rendering
pub mod image;
/// Hex color parsing and formatting
pub mod palette;
/// Terminal progress display
pub mod progress;
/// Layered SVG export
pub mod svg;
