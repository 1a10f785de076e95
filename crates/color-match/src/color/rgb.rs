//! 8-bit sRGB color type
//!
//! Every color that enters the matcher arrives as a hex string. [`Rgb`] is
//! the parsed form of that string and the starting point for all conversions.

use std::fmt;
use std::str::FromStr;

use crate::catalog::ParseColorError;

/// A gamma-encoded sRGB color with 8 bits per channel.
///
/// This is exactly what a `#RRGGBB` string encodes; no precision is lost in
/// either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an uppercase `#RRGGBB` string.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts exactly `#RRGGBB` or `RRGGBB`, case-insensitive. Shorthand
    /// `#RGB` and surrounding whitespace are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_match::Rgb;
    ///
    /// let red: Rgb = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// assert!("#12".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.chars().count()));
        }
        // from_str_radix tolerates a leading '+', and slicing needs ASCII
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
