//! CIE XYZ tristimulus values
//!
//! XYZ is the device-independent hub between sRGB and Lab. It is never
//! stored or exchanged; it only exists on the way from [`Rgb`] to [`Lab`](super::Lab).

use super::rgb::Rgb;

/// sRGB to XYZ primaries matrix (D65, 2° observer), rows X, Y, Z.
///
/// Four-digit coefficients, as in the common reference formulas. Match
/// results for near-ties depend on these exact values.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// A color in CIE XYZ space, scaled so that Y of sRGB white is 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// sRGB electro-optical transfer function (gamma decode), IEC 61966-2-1.
#[inline]
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f64 / 255.0) * 100.0;
        let g = srgb_to_linear(rgb.g as f64 / 255.0) * 100.0;
        let b = srgb_to_linear(rgb.b as f64 / 255.0) * 100.0;

        let [mx, my, mz] = SRGB_TO_XYZ;
        Xyz {
            x: r * mx[0] + g * mx[1] + b * mx[2],
            y: r * my[0] + g * my[1] + b * my[2],
            z: r * mz[0] + g * mz[1] + b * mz[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_transfer_function_segments() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(approx_eq(srgb_to_linear(1.0), 1.0, 1e-12));
        // Linear segment at and below the threshold
        assert!(approx_eq(srgb_to_linear(0.04045), 0.04045 / 12.92, 1e-15));
        // sRGB 0.5 -> linear ~0.214
        assert!(approx_eq(srgb_to_linear(0.5), 0.214041, 1e-6));
    }

    #[test]
    fn test_black_is_origin() {
        let xyz = Xyz::from(Rgb::new(0, 0, 0));
        assert_eq!(xyz, Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white_is_row_sums() {
        // Linearized white is exactly 100 per channel, so XYZ is the row sums
        let xyz = Xyz::from(Rgb::new(255, 255, 255));
        assert!(approx_eq(xyz.x, 95.05, 1e-9), "X = {}", xyz.x);
        assert!(approx_eq(xyz.y, 100.0, 1e-9), "Y = {}", xyz.y);
        assert!(approx_eq(xyz.z, 108.9, 1e-9), "Z = {}", xyz.z);
    }

    #[test]
    fn test_primary_red() {
        let xyz = Xyz::from(Rgb::new(255, 0, 0));
        assert!(approx_eq(xyz.x, 41.24, 1e-9));
        assert!(approx_eq(xyz.y, 21.26, 1e-9));
        assert!(approx_eq(xyz.z, 1.93, 1e-9));
    }
}
