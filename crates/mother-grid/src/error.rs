//! Error type for the fallible edges of mother-grid.
//!
//! Geometry generation and stroking cannot fail. Everything that touches
//! the outside world (parsing colors, allocating a surface, encoding PNG,
//! reading presets) reports through [`GridError`].
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. One enum with a variant
//! per failure source lets callers `match` on what went wrong, while the
//! `Display` impl gives the CLI a ready-made message.

use std::fmt;

#[derive(Debug)]
pub enum GridError {
    /// A color string that is not valid CSS/SVG color syntax.
    InvalidColor(String),
    /// The surface could not be allocated (zero or oversized dimensions).
    Surface { width: u32, height: u32 },
    /// PNG encoding failed.
    Encode(String),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// A preset file could not be parsed.
    Preset(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            GridError::Surface { width, height } => {
                write!(f, "Cannot create a {}x{} surface", width, height)
            }
            GridError::Encode(msg) => write!(f, "PNG encode error: {}", msg),
            GridError::Io(e) => write!(f, "I/O error: {}", e),
            GridError::Preset(msg) => write!(f, "Preset error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        GridError::Io(e)
    }
}
