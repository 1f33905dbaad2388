//! Lattice/argyle pattern generation.
//!
//! `generate` is a pure function of the parameter snapshot and the surface
//! size. It never validates: out-of-range values just produce larger or
//! emptier geometry, and off-surface coordinates are kept as they are.
//!
//! Emission order is fixed: lead-in rows, then forward diagonals, then
//! backward diagonals, each family column-major.

pub mod layout;
mod lattice;

pub use layout::{PatternLayout, ORIGIN_X, RUN_LENGTH_RATIO};

use crate::geometry::Line;
use crate::params::GridParams;
use lattice::{push_backward_diagonals, push_forward_diagonals, push_lead_in_rows};

/// Which family a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Horizontal strand before the lattice
    LeadIn,
    /// Down-right diagonal ("/" family)
    Forward,
    /// Up-right diagonal ("\" family)
    Backward,
}

impl SegmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::LeadIn => "lead-in",
            SegmentKind::Forward => "forward",
            SegmentKind::Backward => "backward",
        }
    }
}

/// Number of segments `generate` produces: `rows + 2 * (columns + 1) * (rows - 1)`.
pub fn segment_count(rows: u32, columns: u32) -> usize {
    let rows = rows as usize;
    let per_family = (columns as usize + 1) * rows.saturating_sub(1);
    rows + 2 * per_family
}

/// Generate the full ordered segment list.
pub fn generate(params: &GridParams, surface_width: u32, surface_height: u32) -> Vec<Line> {
    let layout = PatternLayout::new(params, surface_width, surface_height);
    generate_from_layout(&layout)
}

/// Generate from an already computed layout.
pub fn generate_from_layout(layout: &PatternLayout) -> Vec<Line> {
    let mut lines = Vec::with_capacity(segment_count(layout.rows, layout.columns));
    push_lead_in_rows(layout, &mut lines);
    push_forward_diagonals(layout, &mut lines);
    push_backward_diagonals(layout, &mut lines);
    lines
}

/// Same list as [`generate`], with each segment labeled by family.
pub fn generate_tagged(
    params: &GridParams,
    surface_width: u32,
    surface_height: u32,
) -> Vec<(SegmentKind, Line)> {
    let layout = PatternLayout::new(params, surface_width, surface_height);
    let lines = generate_from_layout(&layout);

    let lead_ins = layout.rows as usize;
    let per_family = (lines.len() - lead_ins) / 2;

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let kind = if i < lead_ins {
                SegmentKind::LeadIn
            } else if i < lead_ins + per_family {
                SegmentKind::Forward
            } else {
                SegmentKind::Backward
            };
            (kind, line)
        })
        .collect()
}
