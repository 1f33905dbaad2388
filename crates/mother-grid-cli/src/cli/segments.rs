//! Segments command: dump the generated geometry as JSON or SVG.

use std::fs;

use serde::Serialize;

use mother_grid::{
    bounds_of, generate_tagged, lines_to_svg, Canvas, GridParams, Line, PatternLayout,
    StrokeStyle,
};

use super::common::{take_value, GridOptions, OutputFormat};

/// A segment in JSON output format.
#[derive(Serialize)]
struct JsonSegment {
    kind: &'static str,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// JSON output: the inputs alongside the segment list.
#[derive(Serialize)]
struct JsonOutput {
    params: GridParams,
    canvas: Canvas,
    count: usize,
    /// `[min_x, min_y, max_x, max_y]`, null for an empty grid
    bounds: Option<[f64; 4]>,
    fits_canvas: bool,
    segments: Vec<JsonSegment>,
}

/// Execute the segments command.
pub fn cmd_segments(args: &[String]) -> Result<(), String> {
    let mut opts = GridOptions::default();
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Json;

    let mut i = 0;
    while i < args.len() {
        if opts.parse_flag(args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(take_value(args, &mut i, "-o")?.to_string());
            }
            "-f" | "--format" => {
                let name = take_value(args, &mut i, "-f")?;
                format = match OutputFormat::from_name(name) {
                    Some(OutputFormat::Yaml) | None => {
                        return Err(format!("Unknown format: {}. Use 'json' or 'svg'.", name));
                    }
                    Some(f) => f,
                };
            }
            "--json" => format = OutputFormat::Json,
            "--svg" => format = OutputFormat::Svg,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("Unknown option for segments: {}", other)),
        }
        i += 1;
    }

    let preset = opts.resolve()?;
    let canvas = preset.canvas;
    let grid = preset.grid;

    let tagged = generate_tagged(&grid, canvas.width, canvas.height);
    let layout = PatternLayout::new(&grid, canvas.width, canvas.height);
    opts.status(&format!("Generated {} segments", tagged.len()));

    let lines: Vec<Line> = tagged.iter().map(|(_, line)| *line).collect();

    let output = match format {
        OutputFormat::Svg => {
            let style = StrokeStyle::new(grid.stroke_color, grid.line_width as f32);
            lines_to_svg(&lines, &canvas, &style)
        }
        _ => {
            let json = JsonOutput {
                params: grid,
                canvas,
                count: tagged.len(),
                bounds: bounds_of(&lines).map(|(min_x, min_y, max_x, max_y)| [min_x, min_y, max_x, max_y]),
                fits_canvas: layout.fits_surface(),
                segments: tagged
                    .iter()
                    .map(|(kind, line)| JsonSegment {
                        kind: kind.name(),
                        x1: line.x1,
                        y1: line.y1,
                        x2: line.x2,
                        y2: line.y2,
                    })
                    .collect(),
            };
            let mut text = serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?;
            text.push('\n');
            text
        }
    };

    match output_path.as_deref() {
        Some("-") | None => print!("{}", output),
        Some(path) => {
            fs::write(path, &output).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            opts.status(&format!("Wrote: {}", path));
        }
    }
    Ok(())
}

pub fn print_usage() {
    eprintln!("mother-grid segments - Print the generated line segments");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    mother-grid segments [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -f, --format <fmt>     json or svg (default: json)");
    eprintln!("    --json / --svg         Shorthand for -f");
    eprintln!("    -o, --output <file>    Output file (- for stdout, default: stdout)");
    super::print_grid_options();
}
