//! SVG export of a segment list.
//!
//! Produces a standalone document the same size as the raster surface:
//! a background rect, then one `<line>` per segment inside a styled group.

use crate::geometry::Line;
use crate::preset::Canvas;
use crate::render::StrokeStyle;

/// Convert lines to an SVG document (individual `<line>` elements).
pub fn lines_to_svg(lines: &[Line], canvas: &Canvas, style: &StrokeStyle) -> String {
    let mut svg = String::with_capacity(256 + lines.len() * 64);
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="{bg}"/>
<g stroke="{stroke}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="miter" fill="none">
"#,
        w = canvas.width,
        h = canvas.height,
        bg = canvas.background,
        stroke = style.color,
        width = style.width,
    ));

    for line in lines {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            line.x1, line.y1, line.x2, line.y2
        ));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::GridParams;
    use crate::patterns::generate;

    #[test]
    fn document_structure() {
        let lines = generate(&GridParams::default(), 800, 600);
        let svg = lines_to_svg(&lines, &Canvas::default(), &StrokeStyle::new(Rgb::BLACK, 2.0));

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r##"stroke="#000000" stroke-width="2""##));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert_eq!(svg.matches("<line ").count(), 79);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn export_parses_as_svg() {
        let lines = generate(&GridParams::default(), 800, 600);
        let svg = lines_to_svg(&lines, &Canvas::default(), &StrokeStyle::new(Rgb::BLACK, 2.0));

        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
        assert_eq!(tree.size().width(), 800.0);
        assert_eq!(tree.size().height(), 600.0);
    }

    #[test]
    fn coordinates_use_two_decimals() {
        let svg = lines_to_svg(
            &[Line::new(50.0, 262.5, 370.0, 262.5)],
            &Canvas::default(),
            &StrokeStyle::new(Rgb::BLACK, 1.0),
        );
        assert!(svg.contains(r#"<line x1="50.00" y1="262.50" x2="370.00" y2="262.50"/>"#));
    }
}
