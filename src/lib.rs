//! Markov chain image remixing with a randomized spatial fill
//!
//! Source images are broken into pixel-adjacency tokens that train an n-gram
//! Markov model. A chain sampled from the model then paints a new image cell
//! by cell, following a frontier traversal whose ordering is re-rolled as it
//! goes, so the output grows in organic, branching strokes rather than in
//! raster order.

#![forbid(unsafe_code)]

/// Spatial fill traversal and canvas assembly
pub mod algorithm;
/// Pixel-adjacency tokenization of source images
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Random index selection helpers
pub mod math;
/// Markov model backends and chain sampling
pub mod model;
/// Logical grid coordinates, geometry and traversal state
pub mod spatial;

pub use io::error::{RemixError, Result};
