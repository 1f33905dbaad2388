//! Render command: draw the grid and export it as PNG.

use std::fs;
use std::time::Instant;

use mother_grid::{Designer, Preset, EXPORT_FILENAME};

use super::common::{describe, take_value, timestamped_filename, GridOptions};

/// Execute the render command.
pub fn cmd_render(args: &[String]) -> Result<(), String> {
    let mut opts = GridOptions::default();
    let mut output_path: Option<String> = None;
    let mut timestamp = false;

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
            "--timestamp" => {
                timestamp = true;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("Unknown option for render: {}", other)),
        }
        i += 1;
    }

    let preset = opts.resolve()?;
    let path = output_path
        .or_else(|| timestamp.then(timestamped_filename))
        .or_else(|| preset.output.clone())
        .unwrap_or_else(|| EXPORT_FILENAME.to_string());

    render_preset(&preset, &path, &opts)
}

/// Draw `preset` and write the PNG to `path`.
pub fn render_preset(preset: &Preset, path: &str, opts: &GridOptions) -> Result<(), String> {
    let start = Instant::now();

    let designer = Designer::with_params(preset.canvas, preset.grid).map_err(|e| e.to_string())?;

    opts.status(&format!("Design: {}", preset.name));
    opts.status(&format!("  Canvas: {}x{} background {}",
        preset.canvas.width, preset.canvas.height, preset.canvas.background));
    opts.status(&format!("  Grid: {}", describe(designer.params())));
    opts.status(&format!("  Segments: {}", designer.segments().len()));

    if !designer.layout().fits_surface() {
        opts.status("Warning: part of the grid lies outside the canvas and will be cut off");
    }

    let bytes = designer.export_png().map_err(|e| e.to_string())?;
    fs::write(path, &bytes).map_err(|e| format!("Failed to write {}: {}", path, e))?;

    opts.status(&format!(
        "Wrote: {} ({}x{}, {} bytes) in {:.1}ms",
        path,
        preset.canvas.width,
        preset.canvas.height,
        bytes.len(),
        start.elapsed().as_secs_f64() * 1000.0
    ));
    Ok(())
}

pub fn print_usage() {
    eprintln!("mother-grid render - Draw the lattice and export a PNG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    mother-grid render [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output PNG (default: {})", EXPORT_FILENAME);
    eprintln!("    --timestamp            Name the file mother-grid-YYYYMMDD-HHMMSS.png");
    super::print_grid_options();
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    mother-grid render");
    eprintln!("    mother-grid render --rows 11 --spacing 30 --color '#1d3557' -o navy.png");
    eprintln!("    mother-grid render --preset navy.yaml --line-width 1");
}
