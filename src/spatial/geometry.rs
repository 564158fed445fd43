//! Mapping between the working canvas and the logical fill grid
//!
//! The fill works on a grid much coarser than the canvas. Each grid cell is
//! painted as one filled circle whose diameter matches the cell pitch, placed
//! with its bounding box at the cell's canvas origin.

use crate::io::configuration::SEED_X_FRACTION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::coordinate::GridCoord;

/// Derived dimensions of a fill over one canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillGeometry {
    scale: f64,
    grid_width: u32,
    grid_height: u32,
    radius: u32,
}

impl FillGeometry {
    /// Derive grid size and paint radius for a canvas at the given scale
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `scale` is not in `(0, 1]`
    /// - The canvas is too small to hold a single grid cell at this scale
    pub fn new(canvas_width: u32, canvas_height: u32, scale: f64) -> Result<Self> {
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &"must be greater than 0 and at most 1",
            ));
        }

        let grid_width = (f64::from(canvas_width) * scale).floor() as u32;
        let grid_height = (f64::from(canvas_height) * scale).floor() as u32;
        if grid_width == 0 || grid_height == 0 {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &format!("a {canvas_width}x{canvas_height} canvas has no grid cells at this scale"),
            ));
        }

        let radius = ((1.0 / scale).ceil() * 0.5) as u32;

        Ok(Self {
            scale,
            grid_width,
            grid_height,
            radius,
        })
    }

    /// Logical grid width in cells
    pub const fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Logical grid height in cells
    pub const fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Total number of cells the fill will paint
    pub const fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Radius of each painted circle in canvas pixels
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Diameter of each painted circle in canvas pixels
    pub const fn diameter(&self) -> u32 {
        self.radius * 2
    }

    /// Starting cell of the fill
    ///
    /// Sits a third of the way across and halfway down, so fills are never
    /// symmetric about the canvas centre.
    pub fn seed(&self) -> GridCoord {
        GridCoord::new(
            (f64::from(self.grid_width) * SEED_X_FRACTION).floor() as i32,
            (self.grid_height / 2) as i32,
        )
    }

    /// Test whether a coordinate lies inside the grid
    pub const fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.grid_width
            && (coord.y as u32) < self.grid_height
    }

    /// Top-left canvas pixel of a cell's painted circle
    pub fn canvas_origin(&self, coord: GridCoord) -> (i32, i32) {
        (
            (f64::from(coord.x) / self.scale).round() as i32,
            (f64::from(coord.y) / self.scale).round() as i32,
        )
    }
}
