//! Circle colors
//!
//! Colors travel through share URLs as six hex digits without a marker and
//! through KML as `aabbggrr`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB` (case-insensitive)
    ///
    /// Three-digit shorthand is expanded by doubling each digit.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(input.to_string()));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(Error::InvalidColor(input.to_string())),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(input.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Normalized form: six uppercase hex digits, no marker
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// KML color string: alpha, blue, green, red
    pub fn kml(&self, alpha: u8) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", alpha, self.b, self.g, self.r)
    }
}

impl Default for Color {
    fn default() -> Self {
        // #4285F4
        Self::rgb(0x42, 0x85, 0xF4)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::share::DEFAULT_COLOR;

    #[test]
    fn test_parse_with_and_without_marker() {
        let a = Color::parse("#4285F4").unwrap();
        let b = Color::parse("4285f4").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.red(), 0x42);
        assert_eq!(a.green(), 0x85);
        assert_eq!(a.blue(), 0xF4);
    }

    #[test]
    fn test_parse_shorthand() {
        let color = Color::parse("#f0a").unwrap();
        assert_eq!(color.hex(), "FF00AA");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("zzzzzz").is_err());
        assert!(Color::parse("##123456").is_err());
    }

    #[test]
    fn test_default_matches_constant() {
        assert_eq!(Color::default(), Color::parse(DEFAULT_COLOR).unwrap());
        assert_eq!(Color::default().to_string(), DEFAULT_COLOR);
    }

    #[test]
    fn test_kml_byte_order() {
        let color = Color::parse("#4285F4").unwrap();
        assert_eq!(color.kml(0xb3), "b3f48542");
        assert_eq!(color.kml(0x26), "26f48542");
    }

    #[test]
    fn test_serde_as_string() {
        let color = Color::parse("ff0000").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#FF0000\"");
        let parsed: Color = serde_json::from_str("\"#0f0\"").unwrap();
        assert_eq!(parsed.hex(), "00FF00");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
