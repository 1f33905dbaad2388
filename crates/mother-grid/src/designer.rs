//! The designer session: parameters in, segments and pixels out.
//!
//! This is the explicit "on change, generate then render" loop. Callers
//! hand over a whole [`GridParams`] snapshot at once; the session clamps
//! it, regenerates the segments if the geometry changed and redraws the
//! full surface before returning. There is no partially applied state.

use crate::error::GridError;
use crate::geometry::Line;
use crate::params::GridParams;
use crate::patterns::{generate_from_layout, PatternLayout};
use crate::preset::Canvas;
use crate::render::{Renderer, StrokeStyle};
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct Designer {
    canvas: Canvas,
    params: GridParams,
    layout: PatternLayout,
    segments: Vec<Line>,
    renderer: Renderer,
}

impl Designer {
    /// Allocate the surface and draw the default design.
    pub fn new(canvas: Canvas) -> Result<Self, GridError> {
        Self::with_params(canvas, GridParams::default())
    }

    /// Allocate the surface and draw `params` (clamped).
    pub fn with_params(canvas: Canvas, params: GridParams) -> Result<Self, GridError> {
        let surface = Surface::new(canvas.width, canvas.height)?;
        let params = params.clamped();
        let layout = PatternLayout::new(&params, canvas.width, canvas.height);
        let segments = generate_from_layout(&layout);

        let mut designer = Self {
            canvas,
            params,
            layout,
            segments,
            renderer: Renderer::new(surface, canvas.background),
        };
        designer.draw();
        Ok(designer)
    }

    /// Replace the parameters and redraw.
    ///
    /// Segments are regenerated only when rows, columns or spacing change.
    pub fn apply(&mut self, params: GridParams) {
        let params = params.clamped();
        if !params.same_geometry(&self.params) {
            self.layout = PatternLayout::new(&params, self.canvas.width, self.canvas.height);
            self.segments = generate_from_layout(&self.layout);
        }
        self.params = params;
        self.draw();
    }

    /// Edit a copy of the current parameters, then apply it.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut GridParams),
    {
        let mut next = self.params;
        edit(&mut next);
        self.apply(next);
    }

    /// Restore the startup defaults and redraw.
    pub fn reset(&mut self) {
        self.apply(GridParams::default());
    }

    fn draw(&mut self) {
        let style = self.stroke_style();
        self.renderer.draw(&self.segments, style);
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn layout(&self) -> &PatternLayout {
        &self.layout
    }

    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.params.stroke_color, self.params.line_width as f32)
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.renderer.surface()
    }

    /// Encode the current surface as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, GridError> {
        match self.surface() {
            Some(surface) => surface.encode_png(),
            None => Err(GridError::Surface { width: self.canvas.width, height: self.canvas.height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::Param;
    use crate::patterns::generate;

    fn designer() -> Designer {
        Designer::new(Canvas::default()).unwrap()
    }

    #[test]
    fn starts_with_default_design_drawn() {
        let d = designer();
        assert_eq!(*d.params(), GridParams::default());
        assert_eq!(d.segments().len(), 79);
        assert!(d.surface().unwrap().count_not(Rgb::WHITE) > 0);
    }

    #[test]
    fn apply_clamps_snapshot() {
        let mut d = designer();
        d.apply(GridParams { rows: 100, columns: 1, ..GridParams::default() });
        assert_eq!(d.params().rows, 15);
        assert_eq!(d.params().columns, 3);
        assert_eq!(d.segments().len(), 15 + 2 * 4 * 14);
    }

    #[test]
    fn reset_restores_defaults_and_segments() {
        let mut d = designer();
        let original = d.segments().to_vec();
        let original_pixels = d.surface().unwrap().data().to_vec();

        d.update(|p| {
            p.set(Param::Rows, 12);
            p.set(Param::Spacing, 25);
            p.set(Param::LineWidth, 4);
            p.stroke_color = Rgb::new(255, 0, 0);
        });
        assert_ne!(d.segments(), &original[..]);

        d.reset();
        assert_eq!(*d.params(), GridParams::default());
        assert_eq!(d.params().stroke_color.to_hex(), "#000000");
        assert_eq!(d.segments(), &original[..]);
        assert_eq!(d.surface().unwrap().data(), &original_pixels[..]);
    }

    #[test]
    fn color_change_keeps_geometry() {
        let mut d = designer();
        let before = d.segments().to_vec();
        let before_pixels = d.surface().unwrap().data().to_vec();

        d.update(|p| p.stroke_color = Rgb::new(0, 0, 255));

        assert_eq!(d.segments(), &before[..]);
        assert_eq!(d.stroke_style().color, Rgb::new(0, 0, 255));
        assert_ne!(d.surface().unwrap().data(), &before_pixels[..]);
    }

    #[test]
    fn stroke_changes_keep_segments_in_step_with_params() {
        let mut d = designer();
        d.update(|p| {
            p.set(Param::Columns, 9);
        });
        d.update(|p| {
            p.set(Param::LineWidth, 5);
            p.stroke_color = Rgb::new(0, 128, 0);
        });
        assert_eq!(d.segments(), &generate(d.params(), 800, 600)[..]);
        assert_eq!(d.layout().columns, 9);

        d.update(|p| {
            p.set(Param::Spacing, 70);
        });
        assert_eq!(d.segments(), &generate(d.params(), 800, 600)[..]);
        assert_eq!(d.layout().spacing, 70.0);
    }

    #[test]
    fn segments_match_pure_generator() {
        let canvas = Canvas { width: 1024, height: 768, background: Rgb::BLACK };
        let params = GridParams { rows: 10, columns: 9, spacing: 30, ..GridParams::default() };
        let d = Designer::with_params(canvas, params).unwrap();
        assert_eq!(d.segments(), &generate(&params, 1024, 768)[..]);
        assert_eq!(d.surface().unwrap().width(), 1024);
    }

    #[test]
    fn zero_canvas_fails_to_start() {
        let canvas = Canvas { width: 0, ..Canvas::default() };
        assert!(Designer::new(canvas).is_err());
    }

    #[test]
    fn export_is_png() {
        let bytes = designer().export_png().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
