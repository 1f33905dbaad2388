//! YAML presets: a named canvas plus a parameter snapshot.
//!
//! A preset only supplies starting values. Every field is optional and
//! falls back to the defaults used at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::GridError;
use crate::params::GridParams;
use crate::surface::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Surface size and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub background: Rgb,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Rgb::WHITE,
        }
    }
}

/// A complete preset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub canvas: Canvas,

    #[serde(default)]
    pub grid: GridParams,

    /// Suggested output file for `render`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_name() -> String {
    "Untitled grid".to_string()
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            canvas: Canvas::default(),
            grid: GridParams::default(),
            output: None,
        }
    }
}

impl Preset {
    /// Load a preset from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, GridError> {
        serde_yaml::from_str(content).map_err(|e| GridError::Preset(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, GridError> {
        serde_yaml::to_string(self).map_err(|e| GridError::Preset(e.to_string()))
    }

    /// Grid parameters pulled into range, the way the sliders would.
    pub fn clamped_grid(&self) -> GridParams {
        self.grid.clamped()
    }

    /// Documented example preset.
    pub fn example() -> &'static str {
        EXAMPLE
    }
}

const EXAMPLE: &str = r##"# Example mother-grid preset
name: "Navy argyle"
description: "Dense lattice in navy on a cream background"

canvas:
  width: 800        # pixels
  height: 600
  background: "#fdf6e3"

grid:
  rows: 9           # 3-15
  columns: 6        # 3-12
  spacing: 36       # 20-80 px
  line_width: 3     # 1-5 px
  stroke_color: "#1d3557"

output: "navy-argyle.png"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_parses() {
        let preset = Preset::from_yaml(Preset::example()).unwrap();
        assert_eq!(preset.name, "Navy argyle");
        assert_eq!(preset.canvas.background, Rgb::new(0xfd, 0xf6, 0xe3));
        assert_eq!(preset.grid.rows, 9);
        assert_eq!(preset.grid.columns, 6);
        assert_eq!(preset.grid.spacing, 36);
        assert_eq!(preset.grid.line_width, 3);
        assert_eq!(preset.grid.stroke_color, Rgb::new(0x1d, 0x35, 0x57));
        assert_eq!(preset.output.as_deref(), Some("navy-argyle.png"));
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let preset = Preset::from_yaml("{}").unwrap();
        assert_eq!(preset, Preset::default());
    }

    #[test]
    fn partial_canvas_keeps_other_defaults() {
        let preset = Preset::from_yaml("canvas:\n  width: 1024\n").unwrap();
        assert_eq!(preset.canvas.width, 1024);
        assert_eq!(preset.canvas.height, DEFAULT_HEIGHT);
        assert_eq!(preset.canvas.background, Rgb::WHITE);
    }

    #[test]
    fn out_of_range_values_load_then_clamp() {
        let preset = Preset::from_yaml("grid:\n  rows: 40\n  spacing: 5\n").unwrap();
        assert_eq!(preset.grid.rows, 40);

        let grid = preset.clamped_grid();
        assert_eq!(grid.rows, 15);
        assert_eq!(grid.spacing, 20);
    }

    #[test]
    fn bad_color_is_a_preset_error() {
        let err = Preset::from_yaml("grid:\n  stroke_color: \"#nothex\"\n").unwrap_err();
        assert!(matches!(err, GridError::Preset(_)));
    }

    #[test]
    fn yaml_round_trip() {
        let preset = Preset::from_yaml(Preset::example()).unwrap();
        let yaml = preset.to_yaml().unwrap();
        assert_eq!(Preset::from_yaml(&yaml).unwrap(), preset);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Preset::load("/nonexistent/mother-grid-preset.yaml").unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
