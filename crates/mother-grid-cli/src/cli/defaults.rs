//! Defaults command: print the startup parameters and their ranges.

use serde::Serialize;

use mother_grid::{Param, Preset};

use super::common::{take_value, OutputFormat};

#[derive(Serialize)]
struct JsonRange {
    name: &'static str,
    min: u32,
    max: u32,
    default: u32,
}

/// Execute the defaults command.
pub fn cmd_defaults(args: &[String]) -> Result<(), String> {
    let mut format = OutputFormat::Yaml;
    let mut bounds = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--format" => {
                let name = take_value(args, &mut i, "-f")?;
                format = match OutputFormat::from_name(name) {
                    Some(OutputFormat::Svg) | None => {
                        return Err(format!("Unknown format: {}. Use 'yaml' or 'json'.", name));
                    }
                    Some(f) => f,
                };
            }
            "--json" => format = OutputFormat::Json,
            "--bounds" => bounds = true,
            "-h" | "--help" => {
                eprintln!("mother-grid defaults - Print the startup parameters");
                eprintln!();
                eprintln!("OPTIONS:");
                eprintln!("    -f, --format <fmt>     yaml or json (default: yaml)");
                eprintln!("    --json                 Shorthand for -f json");
                eprintln!("    --bounds               List each parameter's range instead");
                return Ok(());
            }
            other => return Err(format!("Unknown option for defaults: {}", other)),
        }
        i += 1;
    }

    let preset = Preset::default();

    if bounds {
        let ranges: Vec<JsonRange> = Param::all()
            .iter()
            .map(|p| JsonRange {
                name: p.name(),
                min: p.range().min,
                max: p.range().max,
                default: preset.grid.get(*p),
            })
            .collect();

        match format {
            OutputFormat::Json => {
                let text = serde_json::to_string_pretty(&ranges).map_err(|e| e.to_string())?;
                println!("{}", text);
            }
            _ => {
                println!("Parameter ranges:");
                for r in &ranges {
                    let unit = Param::from_name(r.name).map(|p| p.unit()).unwrap_or("");
                    println!("  {:<12} {:>3}-{:<3}{:<3} default {}", r.name, r.min, r.max, unit, r.default);
                }
                println!("  {:<12} any color     default {}", "color", preset.grid.stroke_color);
            }
        }
        return Ok(());
    }

    let text = match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(&preset).map_err(|e| e.to_string())?;
            s.push('\n');
            s
        }
        _ => preset.to_yaml().map_err(|e| e.to_string())?,
    };
    print!("{}", text);
    Ok(())
}
