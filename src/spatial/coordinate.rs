//! Logical grid coordinates and the six-cell adjacency shared by tokenizer and fill

/// Relative offsets of the six neighbours of a cell, in enumeration order
///
/// Left, upper-left, up, right, lower-right, down. Only the main diagonal is
/// included, so this is a hexagonal adjacency laid over a square grid. The
/// Markov model is trained on exactly these pairs and the fill expands its
/// frontier along them.
pub const NEIGHBOR_OFFSETS: [[i32; 2]; 6] = [[-1, 0], [-1, -1], [0, -1], [1, 0], [1, 1], [0, 1]];

/// A cell in the logical (scaled-down) fill grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridCoord {
    /// Create a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by one of the [`NEIGHBOR_OFFSETS`]
    #[must_use]
    pub const fn offset(self, delta: [i32; 2]) -> Self {
        Self {
            x: self.x + delta[0],
            y: self.y + delta[1],
        }
    }

    /// The six neighbours in [`NEIGHBOR_OFFSETS`] order, unfiltered
    pub fn neighbors(self) -> [Self; 6] {
        NEIGHBOR_OFFSETS.map(|delta| self.offset(delta))
    }
}
