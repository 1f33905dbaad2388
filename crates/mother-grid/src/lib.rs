//! # mother-grid
//!
//! Lattice/argyle grid generation and rasterization.
//!
//! Five parameters (rows, columns, spacing, line width, stroke color) map
//! to an ordered list of line segments through a pure generator. A renderer
//! then redraws a fixed-size surface from that list, and the surface can be
//! encoded to PNG on demand.
//!
//! ```ignore
//! use mother_grid::{Canvas, Designer};
//!
//! let mut designer = Designer::new(Canvas::default())?;
//! designer.update(|p| p.rows = 9);
//! std::fs::write("mother-grid.png", designer.export_png()?)?;
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Every module is declared explicitly below; `pub use` re-exports the
//! types most callers need so they can write `mother_grid::Designer`.

pub mod color;
pub mod designer;
pub mod error;
pub mod geometry;
pub mod params;
pub mod patterns;
pub mod preset;
pub mod render;
pub mod surface;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use color::Rgb;
pub use designer::Designer;
pub use error::GridError;
pub use geometry::{bounds_of, Bounds, Line, Point};
pub use params::{GridParams, Param, ParamRange};
pub use patterns::{generate, generate_tagged, segment_count, PatternLayout, SegmentKind};
pub use preset::{Canvas, Preset};
pub use render::{render, Renderer, StrokeStyle};
pub use surface::{Surface, EXPORT_FILENAME};
pub use svg::lines_to_svg;
