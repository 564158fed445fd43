//! Spatial data structures for the logical fill grid
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and the shared six-cell adjacency
//! - Canvas to grid geometry
//! - Randomized frontier orderings
//! - Visited-cell tracking

/// Grid coordinates and neighbour offsets
pub mod coordinate;
/// Canvas to grid scaling, paint radius and seed placement
pub mod geometry;
/// Randomized direction-biased coordinate orderings
pub mod ordering;
/// Bitset of painted cells
pub mod visited;

pub use coordinate::{GridCoord, NEIGHBOR_OFFSETS};
pub use geometry::FillGeometry;
