//! Segment emitters: horizontal lead-in strands and the two diagonal families.
//!
//! Each emitter appends to a caller-owned `Vec` so `generate` can size the
//! buffer once with [`super::segment_count`].

use crate::geometry::Line;
use super::layout::PatternLayout;

/// One horizontal strand per row, left of the lattice.
pub fn push_lead_in_rows(layout: &PatternLayout, out: &mut Vec<Line>) {
    let x1 = layout.origin.x;
    let x2 = layout.origin.x + layout.run_length;

    for i in 0..layout.rows {
        let y = layout.origin.y + i as f64 * layout.spacing;
        out.push(Line::new(x1, y, x2, y));
    }
}

/// Down-right diagonals, one cell each.
///
/// `columns + 1` columns, rows `[0, rows - 1)`. Column-major order.
pub fn push_forward_diagonals(layout: &PatternLayout, out: &mut Vec<Line>) {
    let last_row = layout.rows.saturating_sub(1);

    for col in 0..=layout.columns {
        for row in 0..last_row {
            out.push(Line::between(
                layout.lattice_point(col, row),
                layout.lattice_point(col + 1, row + 1),
            ));
        }
    }
}

/// Up-right diagonals, one cell each.
///
/// `columns + 1` columns, rows `[1, rows)`. Column-major order.
pub fn push_backward_diagonals(layout: &PatternLayout, out: &mut Vec<Line>) {
    for col in 0..=layout.columns {
        for row in 1..layout.rows {
            out.push(Line::between(
                layout.lattice_point(col, row),
                layout.lattice_point(col + 1, row - 1),
            ));
        }
    }
}
