//! Randomized total orders over grid coordinates
//!
//! The fill sorts each batch of newly discovered neighbours before pushing
//! them onto its stack, so the order decides which neighbour is painted next.
//! Each order picks which corner of the grid comes first and which axis is
//! primary; swapping orders mid-traversal bends the fill into branching,
//! organic shapes.

use rand::Rng;

use crate::spatial::coordinate::GridCoord;

/// A direction-biased ordering of grid coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    /// Sign applied to x before comparison (+1 or -1)
    pub x_factor: i32,
    /// Sign applied to y before comparison (+1 or -1)
    pub y_factor: i32,
    /// Compare x first when set, y first otherwise
    pub sort_by_x: bool,
}

impl SortOrder {
    /// Create an order from explicit parameters
    ///
    /// Factors other than -1 are treated as +1.
    pub const fn new(x_factor: i32, y_factor: i32, sort_by_x: bool) -> Self {
        Self {
            x_factor: if x_factor < 0 { -1 } else { 1 },
            y_factor: if y_factor < 0 { -1 } else { 1 },
            sort_by_x,
        }
    }

    /// Draw both signs and the axis priority uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let x_factor = if rng.random_bool(0.5) { 1 } else { -1 };
        let y_factor = if rng.random_bool(0.5) { 1 } else { -1 };
        let sort_by_x = rng.random_bool(0.5);
        Self {
            x_factor,
            y_factor,
            sort_by_x,
        }
    }

    /// Comparison key of a coordinate under this order
    pub const fn key(&self, coord: GridCoord) -> (i32, i32) {
        let x = coord.x * self.x_factor;
        let y = coord.y * self.y_factor;
        if self.sort_by_x { (x, y) } else { (y, x) }
    }

    /// Stable sort in ascending key order
    pub fn sort(&self, coords: &mut [GridCoord]) {
        coords.sort_by_key(|&coord| self.key(coord));
    }
}
