//! Opaque RGB colors for strokes and backgrounds.
//!
//! Parsing is delegated to `svgtypes`, so anything a browser color input
//! or an SVG attribute would accept works here: `#000`, `#1d3557`,
//! `navy`, `rgb(29, 53, 87)`. The surface has no alpha channel, so any
//! alpha in the input is dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// An 8-bit RGB color. Serializes as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Opaque tiny-skia color for painting.
    pub fn to_skia(&self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.red, self.green, self.blue, 255)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let color = svgtypes::Color::from_str(trimmed)
            .map_err(|e| GridError::InvalidColor(format!("'{}' ({})", trimmed, e)))?;
        Ok(Rgb::new(color.red, color.green, color.blue))
    }
}

impl TryFrom<String> for Rgb {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("#1D3557".parse::<Rgb>().unwrap(), Rgb::new(0x1d, 0x35, 0x57));
    }

    #[test]
    fn parses_named_and_functional() {
        assert_eq!("red".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("rgb(10, 20, 30)".parse::<Rgb>().unwrap(), Rgb::new(10, 20, 30));
        assert_eq!("  navy ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 128));
    }

    #[test]
    fn rejects_garbage() {
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("not-a-color".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn hex_round_trip_is_lowercase() {
        let color = Rgb::new(0xAB, 0x0C, 0xFF);
        assert_eq!(color.to_hex(), "#ab0cff");
        assert_eq!(color.to_string(), "#ab0cff");
        assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn serializes_as_string() {
        let yaml = serde_yaml::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert!(yaml.contains("#ff0000"), "got {}", yaml);
        assert_eq!(serde_yaml::from_str::<Rgb>(&yaml).unwrap(), Rgb::new(255, 0, 0));

        let parsed: Rgb = serde_yaml::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, Rgb::new(0, 255, 0));

        assert!(serde_yaml::from_str::<Rgb>("\"bogus\"").is_err());
    }
}
