//! Black-or-white text color selection for swatch overlays.
//!
//! Uses the YIQ luma threshold rather than a Lab comparison: with only two
//! possible outcomes, a weighted channel sum is all that is needed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::MatchError;
use crate::color::Rgb;

/// Luma at or above which black text is chosen.
pub const LUMA_THRESHOLD: f64 = 128.0;

/// Text color to draw on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    #[serde(rename = "#000000")]
    Black,
    #[serde(rename = "#FFFFFF")]
    White,
}

impl TextColor {
    /// Pick the legible text color for `background`.
    ///
    /// # Example
    ///
    /// ```
    /// use color_match::{Rgb, TextColor};
    ///
    /// assert_eq!(TextColor::for_background(Rgb::new(255, 255, 0)), TextColor::Black);
    /// assert_eq!(TextColor::for_background(Rgb::new(255, 0, 0)), TextColor::White);
    /// ```
    pub fn for_background(background: Rgb) -> Self {
        if yiq_luma(background) >= LUMA_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// `"#000000"` or `"#FFFFFF"`.
    pub fn hex(self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#FFFFFF",
        }
    }
}

/// YIQ luma, 0.0..=255.0: `(299 R + 587 G + 114 B) / 1000`.
#[inline]
pub fn yiq_luma(rgb: Rgb) -> f64 {
    (rgb.r as f64 * 299.0 + rgb.g as f64 * 587.0 + rgb.b as f64 * 114.0) / 1000.0
}

/// Pick the text color for a hex background color.
///
/// # Errors
///
/// Returns [`MatchError::MalformedColor`] if `hex` is not a 6-digit hex color.
pub fn contrast_color(hex: &str) -> Result<TextColor, MatchError> {
    let rgb = Rgb::from_str(hex).map_err(|source| MatchError::malformed(hex, source))?;
    Ok(TextColor::for_background(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(contrast_color("#000000").unwrap(), TextColor::White);
        assert_eq!(contrast_color("#FFFFFF").unwrap(), TextColor::Black);
    }

    #[test]
    fn test_red_gets_white_text() {
        // Luma of pure red is 76.245
        assert!((yiq_luma(Rgb::new(255, 0, 0)) - 76.245).abs() < 1e-9);
        assert_eq!(contrast_color("#FF0000").unwrap(), TextColor::White);
    }

    #[test]
    fn test_threshold_direction_on_greys() {
        // Grey luma equals its channel value, so 0x80 sits exactly on the threshold
        assert_eq!(yiq_luma(Rgb::new(128, 128, 128)), 128.0);
        assert_eq!(contrast_color("#808080").unwrap(), TextColor::Black);
        assert_eq!(yiq_luma(Rgb::new(127, 127, 127)), 127.0);
        assert_eq!(contrast_color("#7F7F7F").unwrap(), TextColor::White);
    }

    #[test]
    fn test_hex_strings() {
        assert_eq!(TextColor::Black.hex(), "#000000");
        assert_eq!(TextColor::White.hex(), "#FFFFFF");
    }

    #[test]
    fn test_serializes_as_hex() {
        assert_eq!(
            serde_json::to_string(&TextColor::White).unwrap(),
            "\"#FFFFFF\""
        );
        let parsed: TextColor = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(parsed, TextColor::Black);
    }

    #[test]
    fn test_malformed_background() {
        assert!(matches!(
            contrast_color("#12"),
            Err(MatchError::MalformedColor { .. })
        ));
    }
}
