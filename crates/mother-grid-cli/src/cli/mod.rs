//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `render` - Draw the lattice and export a PNG
//! - `segments` - Print the generated segments as JSON or SVG
//! - `defaults` - Print the startup parameters and their ranges
//! - `preset` - Render a design from a YAML preset

pub mod common;
pub mod defaults;
pub mod preset;
pub mod render;
pub mod segments;

pub use defaults::cmd_defaults;
pub use preset::cmd_preset;
pub use render::cmd_render;
pub use segments::cmd_segments;

/// Usage lines for the grid flags every drawing command accepts.
pub fn print_grid_options() {
    eprintln!();
    eprintln!("GRID OPTIONS:");
    eprintln!("    -r, --rows <n>         Rows, 3-15 (default: 7)");
    eprintln!("    -c, --columns <n>      Columns, 3-12 (default: 5)");
    eprintln!("    -s, --spacing <px>     Cell spacing, 20-80 (default: 40)");
    eprintln!("    -w, --line-width <px>  Stroke width, 1-5 (default: 2)");
    eprintln!("    --color <color>        Stroke color (default: #000000)");
    eprintln!("    --background <color>   Background color (default: #ffffff)");
    eprintln!("    --width <px>           Canvas width (default: 800)");
    eprintln!("    --height <px>          Canvas height (default: 600)");
    eprintln!("    --preset <file>        Start from a YAML preset");
    eprintln!("    -q, --quiet            No progress output on stderr");
}
