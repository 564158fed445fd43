/// Command-line interface and run orchestration
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types for all remix operations
pub mod error;
/// Source preparation and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
