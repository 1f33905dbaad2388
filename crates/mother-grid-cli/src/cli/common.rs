//! Common utilities shared across CLI commands.
//!
//! Every drawing command accepts the same grid flags. They are collected
//! as overrides first and applied on top of an optional preset, so
//! `--preset navy.yaml --rows 4` changes only the row count.

use chrono::Local;

use mother_grid::{Canvas, GridParams, Param, Preset, Rgb, EXPORT_FILENAME};

/// Output format for segment dumps and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Svg,
    Yaml,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "svg" => Some(OutputFormat::Svg),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Grid flags gathered from the command line.
#[derive(Debug, Default)]
pub struct GridOptions {
    pub preset_path: Option<String>,
    pub values: Vec<(Param, u32)>,
    pub stroke_color: Option<Rgb>,
    pub background: Option<Rgb>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quiet: bool,
}

impl GridOptions {
    /// Try to consume the grid flag at `args[*i]`.
    ///
    /// Returns `Ok(true)` and advances `i` past the value when the flag was
    /// recognized, `Ok(false)` when it belongs to the calling command.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool, String> {
        let flag = args[*i].as_str();
        match flag {
            "-q" | "--quiet" => {
                self.quiet = true;
            }
            "--preset" => {
                self.preset_path = Some(take_value(args, i, flag)?.to_string());
            }
            "-r" | "--rows" => {
                let value = parse_u32(take_value(args, i, flag)?, flag)?;
                self.values.push((Param::Rows, value));
            }
            "-c" | "--columns" => {
                let value = parse_u32(take_value(args, i, flag)?, flag)?;
                self.values.push((Param::Columns, value));
            }
            "-s" | "--spacing" => {
                let value = parse_u32(take_value(args, i, flag)?, flag)?;
                self.values.push((Param::Spacing, value));
            }
            "-w" | "--line-width" => {
                let value = parse_u32(take_value(args, i, flag)?, flag)?;
                self.values.push((Param::LineWidth, value));
            }
            "--color" | "--stroke" => {
                let value = take_value(args, i, flag)?;
                self.stroke_color = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            "--background" | "--bg" => {
                let value = take_value(args, i, flag)?;
                self.background = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            "--width" => {
                self.width = Some(parse_u32(take_value(args, i, flag)?, flag)?);
            }
            "--height" => {
                self.height = Some(parse_u32(take_value(args, i, flag)?, flag)?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Load the preset (if any) and apply the overrides.
    ///
    /// Grid values are clamped; canvas size and background are taken as given.
    pub fn resolve(&self) -> Result<Preset, String> {
        let mut preset = match &self.preset_path {
            Some(path) => Preset::load(path).map_err(|e| format!("{}: {}", path, e))?,
            None => Preset::default(),
        };

        if !preset.grid.is_within_bounds() {
            self.status("Note: preset grid values are out of range and were clamped");
        }
        let mut grid: GridParams = preset.grid.clamped();
        for (param, value) in &self.values {
            let stored = grid.set(*param, *value);
            if stored != *value {
                self.status(&format!(
                    "Note: {} {} is out of range, using {}",
                    param.name(), value, stored
                ));
            }
        }
        if let Some(color) = self.stroke_color {
            grid = grid.with_stroke_color(color);
        }
        preset.grid = grid;

        let canvas: &mut Canvas = &mut preset.canvas;
        if let Some(width) = self.width {
            canvas.width = width;
        }
        if let Some(height) = self.height {
            canvas.height = height;
        }
        if let Some(background) = self.background {
            canvas.background = background;
        }

        Ok(preset)
    }

    /// Progress line on stderr unless `--quiet`.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

/// Consume the value following a flag.
pub fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_u32(value: &str, flag: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a non-negative integer, got '{}'", flag, value))
}

/// Export file name with a local timestamp, e.g. `mother-grid-20240101-120000.png`.
pub fn timestamped_filename() -> String {
    let stem = EXPORT_FILENAME.trim_end_matches(".png");
    format!("{}-{}.png", stem, Local::now().format("%Y%m%d-%H%M%S"))
}

/// One-line summary of a parameter snapshot.
pub fn describe(grid: &GridParams) -> String {
    format!(
        "rows={} columns={} spacing={}px line-width={}px color={}",
        grid.rows, grid.columns, grid.spacing, grid.line_width, grid.stroke_color
    )
}
