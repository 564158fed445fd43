//! Algorithm constants and runtime configuration defaults

// Fill traversal
/// Canvas pixels to logical grid cells (one cell per 40 pixels)
pub const FILL_SCALE: f64 = 0.025;

/// Horizontal position of the seed cell as a fraction of grid width
pub const SEED_X_FRACTION: f64 = 0.33;

/// Chance of re-rolling the frontier sort order after each painted cell
pub const SORT_MUTATION_CHANCE: f64 = 0.75;

// Canvas assembly
/// Working canvas size as a multiple of the requested output size
pub const WORK_CANVAS_FACTOR: u32 = 2;

/// Pixels cropped from every edge after downsampling
pub const CROP_BORDER: u32 = 1;

// Outputs narrower than this would be empty after cropping
/// Smallest accepted output width or height
pub const MIN_OUTPUT_DIMENSION: u32 = 2 * CROP_BORDER + 1;

// Source preparation
/// Sources larger than this square are shrunk before tokenizing
pub const SOURCE_THUMBNAIL_SIZE: u32 = 125;

/// Palette size sources are quantized down to
pub const SOURCE_PALETTE_COLORS: usize = 256;

/// `NeuQuant` sampling factor (1 = best quality, 30 = fastest)
pub const QUANTIZE_SAMPLE_FACTOR: i32 = 10;

// Default values for configurable parameters
/// Default Markov n-gram size
pub const DEFAULT_NGRAM_SIZE: usize = 4;

// Output settings
/// File extension and format of written images
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
