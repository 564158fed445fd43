use bitvec::{bitvec, vec::BitVec};
use std::fmt;

use crate::spatial::coordinate::GridCoord;

/// Fixed-size bitset of painted cells in a logical grid
///
/// Cells are stored row-major. Every cell is tracked by exactly one bit, so
/// membership tests and inserts are O(1).
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl VisitedSet {
    /// Create a set with no cells visited
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Test whether a cell has been visited
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid. The fill only ever asks about
    /// cells it has bounds-checked, so this signals a traversal defect.
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.bits.get(self.index(coord)).as_deref() == Some(&true)
    }

    /// Mark a cell as visited, returning `false` if it already was
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        let index = self.index(coord);
        let was_visited = self.bits.get(index).as_deref() == Some(&true);
        self.bits.set(index, true);
        !was_visited
    }

    /// Number of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every cell has been visited
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Row-major coordinates of all unvisited cells
    pub fn missing(&self) -> Vec<GridCoord> {
        self.bits
            .iter_zeros()
            .map(|index| {
                let width = self.width as usize;
                GridCoord::new((index % width) as i32, (index / width) as i32)
            })
            .collect()
    }

    fn index(&self, coord: GridCoord) -> usize {
        assert!(
            coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height,
            "cell ({}, {}) outside {}x{} grid",
            coord.x,
            coord.y,
            self.width,
            self.height
        );
        coord.y as usize * self.width as usize + coord.x as usize
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedSet({}/{} cells)",
            self.count(),
            self.width as usize * self.height as usize
        )
    }
}
