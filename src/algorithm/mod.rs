/// Randomized frontier flood fill over the logical grid
pub mod fill;
/// Tokenize, train, fill, downsample and crop
pub mod remix;
