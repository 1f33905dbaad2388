//! Preset command: render a design described in a YAML file.
//!
//! Presets carry a canvas, a grid snapshot and an optional output name.
//! The grid flags shared with `render` still apply on top of the file.

use mother_grid::{Preset, EXPORT_FILENAME};

use super::common::{take_value, GridOptions};
use super::render::render_preset;

/// Execute the preset command.
pub fn cmd_preset(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let mut opts = GridOptions::default();
    let mut output_path: Option<String> = None;

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
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--example" => {
                print!("{}", Preset::example());
                return Ok(());
            }
            arg if !arg.starts_with('-') => {
                opts.preset_path = Some(arg.to_string());
            }
            other => return Err(format!("Unknown option for preset: {}", other)),
        }
        i += 1;
    }

    let Some(preset_path) = opts.preset_path.clone() else {
        print_usage();
        return Err("No preset file specified".to_string());
    };

    opts.status(&format!("Loading preset: {}", preset_path));
    let preset = opts.resolve()?;

    if let Some(description) = &preset.description {
        opts.status(&format!("  {}", description));
    }

    let path = output_path
        .or_else(|| preset.output.clone())
        .unwrap_or_else(|| EXPORT_FILENAME.to_string());

    render_preset(&preset, &path, &opts)
}

fn print_usage() {
    eprintln!("mother-grid preset - Render a design from a YAML preset");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    mother-grid preset <preset.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output PNG (default: preset 'output' or {})", EXPORT_FILENAME);
    eprintln!("    --example              Print an example preset YAML");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("Grid flags (--rows, --color, ...) override the preset values.");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    mother-grid preset --example > navy.yaml");
    eprintln!("    mother-grid preset navy.yaml -o navy.png");
}
