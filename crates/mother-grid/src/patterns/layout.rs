//! Layout constants shared by the lead-in rows and the diagonal lattice.
//!
//! Everything here is derived from the parameter snapshot and the surface
//! size once, so the emitters only do index arithmetic.

use crate::geometry::{Bounds, Point};
use crate::params::GridParams;

/// Fixed left margin in pixels.
pub const ORIGIN_X: f64 = 50.0;

/// Fraction of the surface width taken by the horizontal lead-in strands.
pub const RUN_LENGTH_RATIO: f64 = 0.4;

/// Pre-computed layout for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternLayout {
    pub rows: u32,
    pub columns: u32,
    pub spacing: f64,
    /// Length of each horizontal lead-in strand
    pub run_length: f64,
    /// Width of the lattice (`columns * spacing`)
    pub grid_width: f64,
    /// Height used for vertical centering (`rows * spacing`)
    pub grid_height: f64,
    /// Top-left of the lead-in rows. `origin.y` may be negative.
    pub origin: Point,
    /// Top-left anchor of the diagonal lattice
    pub grid_start: Point,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl PatternLayout {
    pub fn new(params: &GridParams, surface_width: u32, surface_height: u32) -> Self {
        let spacing = params.spacing as f64;
        let run_length = surface_width as f64 * RUN_LENGTH_RATIO;
        let grid_width = params.columns as f64 * spacing;
        let grid_height = params.rows as f64 * spacing;

        // Not clamped: a grid taller than the surface starts above it.
        let origin = Point::new(ORIGIN_X, (surface_height as f64 - grid_height) / 2.0);
        let grid_start = Point::new(origin.x + run_length, origin.y);

        Self {
            rows: params.rows,
            columns: params.columns,
            spacing,
            run_length,
            grid_width,
            grid_height,
            origin,
            grid_start,
            surface_width,
            surface_height,
        }
    }

    /// Lattice vertex at (`col`, `row`).
    #[inline]
    pub fn lattice_point(&self, col: u32, row: u32) -> Point {
        Point::new(
            self.grid_start.x + col as f64 * self.spacing,
            self.grid_start.y + row as f64 * self.spacing,
        )
    }

    /// Extent of the geometry this layout produces, without stroke width.
    ///
    /// The last diagonal column ends at `columns + 1`, one cell past
    /// `grid_width`, and the lowest strand sits at row `rows - 1`.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.rows == 0 {
            return None;
        }

        let max_row = (self.rows - 1) as f64;
        let right = if self.rows >= 2 {
            self.grid_start.x + (self.columns + 1) as f64 * self.spacing
        } else {
            self.grid_start.x
        };

        Some((
            self.origin.x,
            self.origin.y,
            right,
            self.origin.y + max_row * self.spacing,
        ))
    }

    /// True when every segment lies inside the surface.
    pub fn fits_surface(&self) -> bool {
        match self.bounds() {
            Some((min_x, min_y, max_x, max_y)) => {
                min_x >= 0.0
                    && min_y >= 0.0
                    && max_x <= self.surface_width as f64
                    && max_y <= self.surface_height as f64
            }
            None => true,
        }
    }
}
