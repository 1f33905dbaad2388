//! Rasterization of segment lists onto a [`Surface`].
//!
//! Every call is a full redraw: clear, fill the background, then stroke
//! each segment in order with round caps and mitered joins. Nothing from a
//! previous call survives, so drawing the same list twice gives the same
//! pixels.

use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Stroke, Transform};

use crate::color::Rgb;
use crate::geometry::Line;
use crate::surface::Surface;

/// Stroke color and width for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Width in pixels
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Rgb, width: f32) -> Self {
        Self { color, width }
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = true;
        paint
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Miter,
            ..Stroke::default()
        }
    }
}

/// Redraw `surface` from scratch with `segments`.
///
/// A missing surface makes this a no-op.
pub fn render(
    surface: Option<&mut Surface>,
    segments: &[Line],
    stroke_color: Rgb,
    line_width: f32,
    background: Rgb,
) {
    let Some(surface) = surface else {
        return;
    };

    let pixmap = surface.pixmap_mut();
    pixmap.fill(Color::TRANSPARENT);
    pixmap.fill(background.to_skia());

    let style = StrokeStyle::new(stroke_color, line_width);
    let paint = style.paint();
    let stroke = style.stroke();

    for line in segments {
        // One path per segment, each stroked on its own.
        let mut pb = PathBuilder::new();
        let (start, end) = (line.start(), line.end());
        pb.move_to(start.x as f32, start.y as f32);
        pb.line_to(end.x as f32, end.y as f32);
        let Some(path) = pb.finish() else {
            continue;
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Owns the surface and the background it is cleared to.
#[derive(Debug, Clone)]
pub struct Renderer {
    surface: Option<Surface>,
    background: Rgb,
}

impl Renderer {
    pub fn new(surface: Surface, background: Rgb) -> Self {
        Self { surface: Some(surface), background }
    }

    /// A renderer with no surface yet. `draw` does nothing until one is attached.
    pub fn detached(background: Rgb) -> Self {
        Self { surface: None, background }
    }

    pub fn attach(&mut self, surface: Surface) {
        self.surface = Some(surface);
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    pub fn draw(&mut self, segments: &[Line], style: StrokeStyle) {
        render(self.surface.as_mut(), segments, style.color, style.width, self.background);
    }
}
