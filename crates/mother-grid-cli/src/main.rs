//! mother-grid - CLI for lattice/argyle grid designs
//!
//! Usage:
//!   mother-grid render [options]        Draw and export a PNG
//!   mother-grid segments [options]      Print segments as JSON or SVG
//!   mother-grid defaults                Print default parameters
//!   mother-grid preset <file.yaml>      Render a YAML preset

mod cli;

use std::env;
use std::process;

use cli::{cmd_defaults, cmd_preset, cmd_render, cmd_segments};

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("mother-grid");

    if args.len() < 2 {
        print_usage(prog);
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "render" => cmd_render(&args[2..]),
        "segments" => cmd_segments(&args[2..]),
        "defaults" => cmd_defaults(&args[2..]),
        "preset" => cmd_preset(&args[2..]),
        "help" | "-h" | "--help" => {
            print_usage(prog);
            Ok(())
        }
        "--version" | "-V" => {
            println!("mother-grid {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(format!("Unknown command: {}. Run '{} help' for usage.", other, prog)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("mother-grid - lattice and argyle grid designer");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} render [options]               Draw and write a PNG", prog);
    eprintln!("  {} segments [options]             Print segments (JSON or SVG)", prog);
    eprintln!("  {} defaults [--json] [--bounds]   Print default parameters", prog);
    eprintln!("  {} preset <file.yaml> [options]   Render a YAML preset", prog);
    eprintln!("  {} help                           Show this help", prog);
    cli::print_grid_options();
    eprintln!();
    eprintln!("Run '{} <command> --help' for command options.", prog);
}
