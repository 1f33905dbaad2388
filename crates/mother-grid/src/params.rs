//! Grid parameters: the five values a design is made of.
//!
//! `GridParams` is a plain `Copy` snapshot. The generator reads it and
//! never validates it; clamping is the caller's job and happens through
//! [`GridParams::clamped`] or [`GridParams::set`].

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Inclusive bounds for an integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRange {
    pub min: u32,
    pub max: u32,
}

impl ParamRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The integer parameters, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Rows,
    Columns,
    Spacing,
    LineWidth,
}

impl Param {
    pub fn all() -> &'static [Param] {
        &[Param::Rows, Param::Columns, Param::Spacing, Param::LineWidth]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Param::Rows => "rows",
            Param::Columns => "columns",
            Param::Spacing => "spacing",
            Param::LineWidth => "line-width",
        }
    }

    /// Parse a parameter name. Accepts `line-width`, `line_width` and `lineWidth`.
    pub fn from_name(name: &str) -> Option<Param> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "rows" => Some(Param::Rows),
            "columns" | "cols" => Some(Param::Columns),
            "spacing" => Some(Param::Spacing),
            "line-width" | "linewidth" => Some(Param::LineWidth),
            _ => None,
        }
    }

    pub fn range(&self) -> ParamRange {
        match self {
            Param::Rows => ROWS,
            Param::Columns => COLUMNS,
            Param::Spacing => SPACING,
            Param::LineWidth => LINE_WIDTH,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Param::Rows | Param::Columns => "",
            Param::Spacing | Param::LineWidth => "px",
        }
    }
}

pub const ROWS: ParamRange = ParamRange::new(3, 15);
pub const COLUMNS: ParamRange = ParamRange::new(3, 12);
pub const SPACING: ParamRange = ParamRange::new(20, 80);
pub const LINE_WIDTH: ParamRange = ParamRange::new(1, 5);

pub const DEFAULT_ROWS: u32 = 7;
pub const DEFAULT_COLUMNS: u32 = 5;
pub const DEFAULT_SPACING: u32 = 40;
pub const DEFAULT_LINE_WIDTH: u32 = 2;
pub const DEFAULT_STROKE_COLOR: Rgb = Rgb::BLACK;

/// A complete, immutable parameter snapshot.
///
/// Missing fields in a preset file fall back to the defaults, so a preset
/// can override just `rows` and keep everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub rows: u32,
    pub columns: u32,
    /// Cell size in pixels
    pub spacing: u32,
    /// Stroke width in pixels
    #[serde(alias = "lineWidth")]
    pub line_width: u32,
    #[serde(alias = "strokeColor", alias = "color")]
    pub stroke_color: Rgb,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
            line_width: DEFAULT_LINE_WIDTH,
            stroke_color: DEFAULT_STROKE_COLOR,
        }
    }
}

impl GridParams {
    /// Copy with every integer field clamped into its range.
    pub fn clamped(self) -> Self {
        Self {
            rows: ROWS.clamp(self.rows),
            columns: COLUMNS.clamp(self.columns),
            spacing: SPACING.clamp(self.spacing),
            line_width: LINE_WIDTH.clamp(self.line_width),
            stroke_color: self.stroke_color,
        }
    }

    /// True when every integer field is already within its range.
    pub fn is_within_bounds(&self) -> bool {
        Param::all().iter().all(|p| p.range().contains(self.get(*p)))
    }

    pub fn get(&self, param: Param) -> u32 {
        match param {
            Param::Rows => self.rows,
            Param::Columns => self.columns,
            Param::Spacing => self.spacing,
            Param::LineWidth => self.line_width,
        }
    }

    /// Set one field, clamped to its range. Returns the value actually stored.
    pub fn set(&mut self, param: Param, value: u32) -> u32 {
        let value = param.range().clamp(value);
        match param {
            Param::Rows => self.rows = value,
            Param::Columns => self.columns = value,
            Param::Spacing => self.spacing = value,
            Param::LineWidth => self.line_width = value,
        }
        value
    }

    pub fn with_stroke_color(mut self, color: Rgb) -> Self {
        self.stroke_color = color;
        self
    }

    /// True when `other` would produce the same segments.
    ///
    /// Stroke width and color only affect rendering.
    pub fn same_geometry(&self, other: &GridParams) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.spacing == other.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reset_values() {
        let p = GridParams::default();
        assert_eq!(p.rows, 7);
        assert_eq!(p.columns, 5);
        assert_eq!(p.spacing, 40);
        assert_eq!(p.line_width, 2);
        assert_eq!(p.stroke_color.to_hex(), "#000000");
        assert!(p.is_within_bounds());
    }

    #[test]
    fn clamped_pulls_each_field_independently() {
        let p = GridParams {
            rows: 1,
            columns: 99,
            spacing: 50,
            line_width: 0,
            stroke_color: Rgb::WHITE,
        };
        assert!(!p.is_within_bounds());

        let c = p.clamped();
        assert_eq!((c.rows, c.columns, c.spacing, c.line_width), (3, 12, 50, 1));
        assert_eq!(c.stroke_color, Rgb::WHITE);
        assert!(c.is_within_bounds());
    }

    #[test]
    fn set_clamps_and_reports_stored_value() {
        let mut p = GridParams::default();
        assert_eq!(p.set(Param::Spacing, 200), 80);
        assert_eq!(p.spacing, 80);
        assert_eq!(p.set(Param::Rows, 9), 9);
        assert_eq!(p.get(Param::Rows), 9);
    }

    #[test]
    fn param_names_round_trip() {
        for param in Param::all() {
            assert_eq!(Param::from_name(param.name()), Some(*param));
        }
        assert_eq!(Param::from_name("lineWidth"), Some(Param::LineWidth));
        assert_eq!(Param::from_name("line_width"), Some(Param::LineWidth));
        assert_eq!(Param::from_name("depth"), None);
    }

    #[test]
    fn geometry_ignores_stroke_style() {
        let a = GridParams::default();
        let mut b = a.with_stroke_color(Rgb::new(200, 0, 0));
        b.set(Param::LineWidth, 5);
        assert!(a.same_geometry(&b));

        b.set(Param::Rows, 8);
        assert!(!a.same_geometry(&b));
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let p: GridParams = serde_yaml::from_str("rows: 11\nstrokeColor: \"#ff0000\"\n").unwrap();
        assert_eq!(p.rows, 11);
        assert_eq!(p.columns, DEFAULT_COLUMNS);
        assert_eq!(p.stroke_color, Rgb::new(255, 0, 0));
    }
}
