//! The raster surface the renderer paints on, and its PNG export.
//!
//! A thin owner around a `tiny_skia::Pixmap`. Export goes through the
//! `image` crate so the PNG carries plain RGB with no alpha channel.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};
use tiny_skia::Pixmap;

use crate::color::Rgb;
use crate::error::GridError;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// File name used when exporting the current design.
pub const EXPORT_FILENAME: &str = "mother-grid.png";

/// Fixed-size raster target.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Allocate a transparent surface. Fails on zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let pixmap = Pixmap::new(width, height).ok_or(GridError::Surface { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Color of one pixel with alpha dropped, or `None` if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // Pixmap::pixel only checks the flat index, so x past the edge would wrap.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(c.red(), c.green(), c.blue()))
    }

    /// Count of pixels that differ from `color`.
    pub fn count_not(&self, color: Rgb) -> usize {
        self.pixmap
            .pixels()
            .iter()
            .map(|p| p.demultiply())
            .filter(|c| (c.red(), c.green(), c.blue()) != (color.red, color.green, color.blue))
            .count()
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Copy the current pixels into an RGB image.
    pub fn to_rgb_image(&self) -> Result<RgbImage, GridError> {
        let mut buf = Vec::with_capacity(self.width() as usize * self.height() as usize * 3);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            buf.extend_from_slice(&[c.red(), c.green(), c.blue()]);
        }

        RgbImage::from_raw(self.width(), self.height(), buf)
            .ok_or_else(|| GridError::Encode("pixel buffer size mismatch".to_string()))
    }

    /// Encode the current pixels as an RGB PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, GridError> {
        let img = DynamicImage::ImageRgb8(self.to_rgb_image()?);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)
            .map_err(|e| GridError::Encode(e.to_string()))?;
        Ok(bytes.into_inner())
    }

    /// Encode and write to `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), GridError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(16, 8).unwrap();
        assert_eq!(surface.width(), 16);
        assert_eq!(surface.height(), 8);
        assert_eq!(surface.data().len(), 16 * 8 * 4);
        assert!(surface.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(matches!(
            Surface::new(0, 600),
            Err(GridError::Surface { width: 0, height: 600 })
        ));
    }

    #[test]
    fn pixel_out_of_range() {
        let surface = Surface::new(4, 4).unwrap();
        assert!(surface.pixel(3, 3).is_some());
        assert!(surface.pixel(4, 0).is_none());
        assert!(surface.pixel(0, 4).is_none());
    }

    #[test]
    fn pixel_past_right_edge_does_not_wrap() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.pixmap_mut().fill(Rgb::WHITE.to_skia());
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(Rgb::BLACK.to_skia());
        let first_of_row_one = tiny_skia::Rect::from_xywh(0.0, 1.0, 1.0, 1.0).unwrap();
        surface.pixmap_mut().fill_rect(first_of_row_one, &paint, tiny_skia::Transform::identity(), None);

        assert_eq!(surface.pixel(0, 1), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(u32::MAX, 0), None);
    }

    #[test]
    fn rgb_image_matches_surface_size() {
        let mut surface = Surface::new(7, 3).unwrap();
        surface.pixmap_mut().fill(Rgb::new(1, 2, 3).to_skia());
        let image = surface.to_rgb_image().unwrap();

        assert_eq!(image.dimensions(), (7, 3));
        assert_eq!(image.as_raw().len(), 7 * 3 * 3);
        assert_eq!(image.get_pixel(6, 2).0, [1, 2, 3]);
    }

    #[test]
    fn png_is_rgb_without_alpha() {
        let mut surface = Surface::new(10, 6).unwrap();
        surface.pixmap_mut().fill(Rgb::new(12, 34, 56).to_skia());

        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (10, 6));
        assert_eq!(decoded.to_rgb8().get_pixel(5, 3).0, [12, 34, 56]);
    }

    #[test]
    fn save_png_writes_file() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.pixmap_mut().fill(Rgb::WHITE.to_skia());

        let path = std::env::temp_dir().join(format!("mother-grid-test-{}.png", std::process::id()));
        surface.save_png(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, surface.encode_png().unwrap());
    }
}
