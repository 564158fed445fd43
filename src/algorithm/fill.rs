//! Randomized frontier flood fill over the logical grid
//!
//! The fill keeps a stack of discovered cells. Each popped cell is painted
//! with the next colour from the pixel stream, then its unvisited in-bounds
//! neighbours are sorted by the current [`SortOrder`] and pushed, so the last
//! one in that order is painted next. After every cell the order is re-rolled
//! with [`SORT_MUTATION_CHANCE`], which keeps the fill locally coherent while
//! its overall direction keeps wandering.

use image::RgbImage;
use imageproc::drawing::draw_filled_ellipse_mut;
use indicatif::ProgressBar;
use log::debug;
use rand::Rng;

use crate::analysis::tokenizer::ColorToken;
use crate::io::configuration::SORT_MUTATION_CHANCE;
use crate::io::error::{RemixError, Result};
use crate::spatial::geometry::FillGeometry;
use crate::spatial::ordering::SortOrder;
use crate::spatial::visited::VisitedSet;

/// Anything the fill can paint filled circles onto
pub trait PaintSurface {
    /// Fill the circle inscribed in the square at `top_left` with side `diameter`
    fn fill_ellipse(&mut self, top_left: (i32, i32), diameter: u32, color: ColorToken);
}

impl PaintSurface for RgbImage {
    fn fill_ellipse(&mut self, top_left: (i32, i32), diameter: u32, color: ColorToken) {
        let radius = (diameter / 2) as i32;
        draw_filled_ellipse_mut(
            self,
            (top_left.0 + radius, top_left.1 + radius),
            radius,
            radius,
            color.into(),
        );
    }
}

/// Summary of a completed fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Cells painted, one pixel-stream value each
    pub cells_painted: usize,
    /// Times the frontier sort order was replaced
    pub reorderings: usize,
    /// Logical grid dimensions (width, height)
    pub grid_dimensions: (u32, u32),
}

/// Paint every cell of the logical grid exactly once
///
/// Pulls exactly one colour from `pixels` per painted cell, in painting
/// order, and never pulls ahead. Stale frontier entries (cells pushed more
/// than once) are skipped without consuming a colour.
///
/// # Errors
///
/// Returns [`RemixError::PixelStreamExhausted`] if `pixels` ends before every
/// cell has been painted.
///
/// # Panics
///
/// Panics if a frontier cell ever falls outside the grid, which would be a
/// traversal defect rather than bad input.
pub fn fill<S, P, R>(
    geometry: &FillGeometry,
    surface: &mut S,
    pixels: &mut P,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<FillReport>
where
    S: PaintSurface,
    P: Iterator<Item = ColorToken>,
    R: Rng,
{
    let expected = geometry.cell_count();
    let diameter = geometry.diameter();
    let mut visited = VisitedSet::new(geometry.grid_width(), geometry.grid_height());
    let mut frontier = vec![geometry.seed()];
    let mut order = SortOrder::random(rng);
    let mut report = FillReport {
        grid_dimensions: (geometry.grid_width(), geometry.grid_height()),
        ..FillReport::default()
    };

    debug!(
        "Filling {}x{} grid from seed {:?}",
        geometry.grid_width(),
        geometry.grid_height(),
        geometry.seed()
    );

    while let Some(cell) = frontier.pop() {
        if visited.contains(cell) {
            continue;
        }

        let color = pixels.next().ok_or(RemixError::PixelStreamExhausted {
            painted: report.cells_painted,
            expected,
        })?;
        surface.fill_ellipse(geometry.canvas_origin(cell), diameter, color);
        visited.insert(cell);
        report.cells_painted += 1;
        progress.inc(1);

        let mut discovered: Vec<_> = cell
            .neighbors()
            .into_iter()
            .filter(|&neighbor| geometry.contains(neighbor) && !visited.contains(neighbor))
            .collect();
        order.sort(&mut discovered);
        frontier.extend(discovered);

        if rng.random_bool(SORT_MUTATION_CHANCE) {
            order = SortOrder::random(rng);
            report.reorderings += 1;
        }
    }

    assert!(
        visited.is_complete(),
        "fill left {} of {expected} cells unpainted",
        expected - visited.count()
    );

    Ok(report)
}
